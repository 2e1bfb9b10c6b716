use crate::config;
use crate::hooks::{use_fade_in_parallax, use_parallax};
use crate::scroll::{star_fill, window_fade};
use yew::prelude::*;

const WHY_WAIT_STATEMENTS: [&str; 3] = [
    "• False promise became No.1 marketing tactic",
    "• Competition is over who lies bigger\n(not product quality)",
    "• This leads to financial and mental damage for consumers",
];

fn opacity_style(opacity: f64) -> String {
    format!("opacity: {};", opacity)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let stars = use_parallax();
    let how_it_works = use_parallax();
    let why_wait = use_fade_in_parallax(WHY_WAIT_STATEMENTS.len(), config::WHY_WAIT_PLATEAU);

    let (left_start, left_span) = config::LEFT_CARD_FADE;
    let (right_start, right_span) = config::RIGHT_CARD_FADE;
    let left_card_opacity = window_fade(how_it_works.progress, left_start, left_span);
    let right_card_opacity = window_fade(how_it_works.progress, right_start, right_span);

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <section class="hero-section">
                <div class="content-wrapper">
                    <h1 class="main-heading">{"Filtered, honest internet for a price of coffee"}</h1>
                    <div class="hero-subtext">{"join our verified trust network for $0.99 yearly"}</div>
                </div>
            </section>

            <div class="parallax-tall" ref={how_it_works.node.clone()}>
                <div class="parallax-sticky">
                    <div class="content-wrapper">
                        <h2 class="sub-heading">{"What you get"}</h2>
                        <div class="how-it-works-row">
                            <div class="how-it-works-column left" style={opacity_style(left_card_opacity)}>
                                <div class="column-subheading">
                                    {"Star ratings and analytics"}<br/>{"for products and creators"}
                                </div>
                                <div class="how-it-works-image">
                                    <img src="/HIW1.png" alt="Ratings and Analytics" loading="lazy" />
                                </div>
                            </div>
                            <div class="how-it-works-column" style={opacity_style(right_card_opacity)}>
                                <div class="column-subheading">
                                    {"Hide (or not) at your"}<br/>{"desired trust level"}
                                </div>
                                <div class="how-it-works-image">
                                    <img src="/HIW2.png" alt="Trust Filter Cards" loading="lazy" />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="parallax-tall" ref={why_wait.node.clone()}>
                <div class="parallax-sticky">
                    <div class="content-wrapper">
                        <h2 class="sub-heading">{"Why it can't wait"}</h2>
                        <div class="statement-list">
                            {
                                WHY_WAIT_STATEMENTS.iter().enumerate().map(|(i, text)| {
                                    let opacity = why_wait.opacities.get(i).copied().unwrap_or(0.0);
                                    html! {
                                        <div class="body-text statement" key={i} style={opacity_style(opacity)}>
                                            {*text}
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>

            <div class="parallax-tall short" ref={stars.node.clone()}>
                <div class="parallax-sticky">
                    <div class="content-wrapper">
                        <h2 class="sub-heading">{"How do we rate"}</h2>
                        <p class="body-text light">
                            {"We combine background checks, AI analytics and journalistic"}<br/>
                            {"investigations data to warn you from online dangers"}
                        </p>
                        <div class={classes!("stars-container", stars.visible.then_some("in-view"))}>
                            {
                                (0..config::STAR_COUNT).map(|index| {
                                    let fill = star_fill(index, stars.progress, config::STAR_COUNT);
                                    html! {
                                        <div class="star-wrapper" key={index}>
                                            <i class="fa-solid fa-star" style={format!("color: {};", fill)}></i>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="body-text light">
                            {"We assign trust ratings to public personas, creators and"}<br/>
                            {"soon businesses"}
                        </p>
                    </div>
                </div>
            </div>

            <section class="final-section">
                <div class="content-wrapper">
                    <div class="body-text light closing">{"We'll keep every liar in check"}</div>
                    <a class="join-offer-box" href={config::get_offer_url()} target="_blank" rel="noopener noreferrer">
                        <div class="join-today">{"Join today"}</div>
                        <div class="join-price">
                            {"2 years for "}<span class="old-price">{"11.98"}</span>{" 5.99"}
                        </div>
                    </a>
                    <div class="offer-subtext">
                        {"We go live on November 1, don't miss our pre-sale special"}<br/>
                        {"Support the movement towards a cleaner happier life!"}
                    </div>
                </div>
            </section>
            <style>
                {r#"
    .landing-page {
        width: 100%;
        max-width: 1280px;
        margin: 0 auto;
        background: #fff;
        font-family: 'Sofia Sans', sans-serif;
        color: #000;
    }
    .hero-section,
    .final-section {
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: #fff;
    }
    .content-wrapper {
        width: 100%;
        max-width: 1150px;
        margin: 0 auto;
        text-align: center;
        padding: 0 24px;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        box-sizing: border-box;
    }
    .main-heading {
        font-weight: 200;
        font-size: 60px;
        line-height: 90px;
        margin: 0 0 24px 0;
    }
    .hero-subtext {
        font-weight: 300;
        font-size: 40px;
        line-height: 60px;
    }
    .sub-heading {
        font-weight: 200;
        font-size: 50px;
        line-height: 60px;
        max-width: 653px;
        margin: 0 auto 40px;
    }
    .body-text {
        font-weight: 300;
        font-size: 40px;
        line-height: 60px;
        margin: 0 0 24px 0;
        white-space: pre-line;
    }
    .statement-list {
        text-align: left;
        margin: 32px auto;
        max-width: 950px;
        padding: 0 24px;
    }
    .statement {
        text-align: left;
        margin-bottom: 16px;
        transition: opacity 0.1s linear;
    }
    .closing {
        margin: 0;
    }
    .parallax-tall {
        height: 250vh;
        position: relative;
        width: 100%;
    }
    .parallax-tall.short {
        height: 200vh;
    }
    .parallax-sticky {
        position: sticky;
        top: 0;
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: transparent;
    }
    .how-it-works-row {
        display: flex;
        flex-direction: row;
        gap: 80px;
        justify-content: center;
        align-items: flex-start;
        width: 100%;
        margin: 48px 0 0 0;
    }
    .how-it-works-column {
        display: flex;
        flex-direction: column;
        align-items: center;
        flex-basis: 45%;
        max-width: 450px;
        min-width: 220px;
    }
    .how-it-works-column.left {
        flex-basis: 55%;
        max-width: 550px;
    }
    .column-subheading {
        font-weight: 300;
        font-size: 40px;
        line-height: 60px;
        margin-bottom: 32px;
    }
    .how-it-works-image {
        width: 340px;
        height: 220px;
        background: #fff;
        border-radius: 18px;
        box-shadow: 0 2px 12px #00000010;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .how-it-works-image img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        border-radius: 18px;
        display: block;
    }
    .stars-container {
        display: flex;
        gap: 8px;
        justify-content: center;
        margin: 32px 0;
    }
    .stars-container.in-view .star-wrapper i {
        transition: color 0.15s linear;
    }
    .star-wrapper {
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 40px;
    }
    .join-offer-box {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        min-width: 340px;
        padding: 24px 48px 8px 48px;
        margin: 48px 0 32px 0;
        border: 4px solid transparent;
        border-radius: 18px;
        background: #fff;
        background-clip: padding-box;
        color: #222;
        font-weight: 300;
        text-decoration: none;
        box-shadow: 0 4px 24px #0002;
        transition: box-shadow 0.2s;
        overflow: hidden;
        z-index: 1;
    }
    /* liquid metal border */
    .join-offer-box::before {
        content: '';
        position: absolute;
        z-index: -1;
        inset: 0;
        border-radius: 18px;
        background: linear-gradient(120deg, #e0e0e0 0%, #b0b0b0 20%, #fafafa 50%, #b0b0b0 80%, #e0e0e0 100%);
        box-shadow: 0 2px 16px #b0b0b044 inset;
        -webkit-mask: linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);
        -webkit-mask-composite: xor;
        mask-composite: exclude;
    }
    .join-today {
        font-size: 48px;
    }
    .join-price {
        font-size: 28px;
        margin-top: 8px;
    }
    .old-price {
        text-decoration: line-through;
        color: #888;
        margin: 0 8px 0 4px;
    }
    .offer-subtext {
        font-weight: 300;
        font-size: 32px;
        line-height: 48px;
        margin-top: 40px;
        color: #222;
    }
    .light {
        font-weight: 300;
    }
    @media (max-width: 900px) {
        .how-it-works-row {
            flex-direction: column;
            gap: 48px;
            align-items: center;
        }
        .how-it-works-column,
        .how-it-works-column.left {
            flex-basis: 100%;
            max-width: 100vw;
        }
        .how-it-works-image {
            width: 90vw;
            max-width: 340px;
            height: 160px;
        }
    }
    @media (max-width: 768px) {
        .star-wrapper {
            font-size: 32px;
        }
    }
    @media (max-width: 600px) {
        .content-wrapper {
            max-width: 95vw;
            padding: 0 8px;
        }
        .main-heading,
        .sub-heading {
            font-size: 30px;
            line-height: 38px;
        }
        .hero-subtext,
        .column-subheading {
            font-size: 25px;
            line-height: 34px;
        }
        .body-text,
        .offer-subtext {
            font-size: 20px;
            line-height: 28px;
        }
        .offer-subtext {
            margin-top: 24px;
        }
        .join-offer-box {
            min-width: 0;
            padding: 18px 8vw 4px 8vw;
        }
        .join-today {
            font-size: 25px;
        }
        .join-price {
            font-size: 20px;
        }
    }
                "#}
            </style>
        </div>
    }
}
