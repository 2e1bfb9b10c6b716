// Pre-sale checkout the join box links to. Override at build time with
// TRUSTNET_OFFER_URL.
pub fn get_offer_url() -> &'static str {
    option_env!("TRUSTNET_OFFER_URL").unwrap_or("https://neurolock.gumroad.com/l/fehbt?wanted=true")
}

pub const STAR_COUNT: usize = 5;

// Share of the sticky section's progress the last statement stays pinned at full opacity.
pub const WHY_WAIT_PLATEAU: f64 = 0.4;

// (start, span) windows of the "What you get" section progress.
pub const LEFT_CARD_FADE: (f64, f64) = (0.1, 0.3);
pub const RIGHT_CARD_FADE: (f64, f64) = (0.4, 0.3);
