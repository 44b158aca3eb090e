use log::Level;

pub const BRAND_NAME: &str = "Digital Mayur";

pub const WHATSAPP_URL: &str = "https://wa.me/919011140878";
pub const PHONE_HREF: &str = "tel:+919011140878";
pub const PHONE_DISPLAY: &str = "+91 9011140878";
pub const CONTACT_EMAIL: &str = "hello@digitalmayur.com";
pub const OFFICE_ADDRESS: &str = "Madhukunj, Tilke Colony-Nashik-422002";

/// Navbar switches to its compact style once the page is scrolled past this.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of an element that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions while developing with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
