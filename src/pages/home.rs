use yew::prelude::*;

use crate::components::navbar::Nav;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::pages::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services, testimonials::Testimonials,
};

/// The whole site: one page, sections in a fixed order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <Nav />
            <main>
                <Hero />
                <Services />
                <About />
                <Portfolio />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
            <WhatsAppButton />
        </div>
    }
}
