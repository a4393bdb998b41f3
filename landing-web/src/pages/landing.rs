//! Landing page
//!
//! Banner, top sign-up, about copy, bottom sign-up, GIF, footer.

use leptos::prelude::*;
use shared::site::{CONTACT_EMAIL, SUBWAY_GIF};

use crate::components::{Banner, Footer, FormPosition, WaitlistForm};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Banner/>

        <WaitlistForm position=FormPosition::Top/>

        <div class="info-card">
            <h2 class="info-card-title">"What is Showfari?"</h2>
            <p class="section-body">
                "Founded by artists and members of the scene, we wanted to make it easier for \
                 people to discover the kind of special shows we know and love without having \
                 to just stumble upon them. So we’re setting out to connect you directly with \
                 the performances we think will introduce you to your next favourite artist."
            </p>
        </div>

        <Section title="A way to amplify the Scene!">
            "With our platform, you will be able to explore the city’s vibrant scene, find and \
             follow artists and promoters, and get personalized recommendations for shows that \
             match your unique taste in music."
        </Section>

        <Section title="Why are we asking for the email?">
            "With signing up for our waitlist, you’ll be the first to join our beta coming soon! \
             We’re excited to grow and build this together, and we would love your support. \
             Even a simple follow or share helps us help you!"
        </Section>

        <Section title="Contact us!">
            "If you have any concerns or suggestions during our development you can contact us at: "
            {CONTACT_EMAIL}
        </Section>

        <WaitlistForm position=FormPosition::Bottom/>

        <div class="gif-frame">
            <img
                src=SUBWAY_GIF
                alt="People enjoying live music"
                width="600"
                height="300"
                class="gif"
            />
        </div>

        <Footer/>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section-title">{title}</h2>
            <p class="section-body">{children()}</p>
        </section>
    }
}
