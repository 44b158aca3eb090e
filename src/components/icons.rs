//! Inline SVG icons (lucide outlines) used across the page.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    CheckCircle,
    ChevronRight,
    Close,
    Code,
    Facebook,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    Megaphone,
    Menu,
    MessageCircle,
    Palette,
    Phone,
    Search,
    Share,
    Star,
    Store,
    Twitter,
}

impl IconKind {
    /// Solid glyphs are drawn with `fill`, everything else with a stroke.
    fn is_solid(self) -> bool {
        matches!(self, IconKind::Star | IconKind::Store | IconKind::MessageCircle)
    }

    fn shapes(self) -> Html {
        match self {
            IconKind::ArrowRight => html! {
                <><path d="M5 12h14" /><path d="m12 5 7 7-7 7" /></>
            },
            IconKind::CheckCircle => html! {
                <><circle cx="12" cy="12" r="10" /><path d="m9 12 2 2 4-4" /></>
            },
            IconKind::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
            IconKind::Close => html! {
                <><path d="M18 6 6 18" /><path d="m6 6 12 12" /></>
            },
            IconKind::Code => html! {
                <><path d="m18 16 4-4-4-4" /><path d="m6 8-4 4 4 4" /><path d="m14.5 4-5 16" /></>
            },
            IconKind::Facebook => html! {
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
            },
            IconKind::Instagram => html! {
                <>
                    <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            IconKind::Linkedin => html! {
                <>
                    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                    <rect width="4" height="12" x="2" y="9" />
                    <circle cx="4" cy="4" r="2" />
                </>
            },
            IconKind::Mail => html! {
                <>
                    <rect width="20" height="16" x="2" y="4" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            IconKind::MapPin => html! {
                <><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" /><circle cx="12" cy="10" r="3" /></>
            },
            IconKind::Megaphone => html! {
                <><path d="m3 11 18-5v12L3 14v-3z" /><path d="M11.6 16.8a3 3 0 1 1-5.8-1.6" /></>
            },
            IconKind::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="12" y2="12" />
                    <line x1="4" x2="20" y1="6" y2="6" />
                    <line x1="4" x2="20" y1="18" y2="18" />
                </>
            },
            IconKind::MessageCircle => html! { <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" /> },
            IconKind::Palette => html! {
                <>
                    <circle cx="13.5" cy="6.5" r=".5" />
                    <circle cx="17.5" cy="10.5" r=".5" />
                    <circle cx="8.5" cy="7.5" r=".5" />
                    <circle cx="6.5" cy="12.5" r=".5" />
                    <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" />
                </>
            },
            IconKind::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            IconKind::Search => html! {
                <><circle cx="11" cy="11" r="8" /><path d="m21 21-4.3-4.3" /></>
            },
            IconKind::Share => html! {
                <>
                    <circle cx="18" cy="5" r="3" />
                    <circle cx="6" cy="12" r="3" />
                    <circle cx="18" cy="19" r="3" />
                    <line x1="8.59" x2="15.42" y1="13.51" y2="17.49" />
                    <line x1="15.41" x2="8.59" y1="6.51" y2="10.49" />
                </>
            },
            IconKind::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            IconKind::Store => html! {
                <path d="M21.9 8.89l-1.05-4.37c-.22-.9-1-1.52-1.91-1.52H5.05c-.9 0-1.69.63-1.9 1.52L2.1 8.89c-.11.44-.04.9.2 1.28.23.35.6.58 1.01.62v8.21c0 1.1.9 2 2 2h13.38c1.1 0 2-.9 2-2v-8.21c.4-.04.78-.27 1.01-.62.24-.38.31-.84.2-1.28zM18 19H6v-8.1c.03 0 .05.01.09.01.67 0 1.25-.33 1.62-.85.37.52.94.85 1.62.85.67 0 1.25-.33 1.62-.85.37.52.94.85 1.62.85.67 0 1.25-.33 1.62-.85.37.52.95.85 1.62.85.04 0 .06-.01.09-.01V19z" />
            },
            IconKind::Twitter => html! {
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let (fill, stroke) = if props.kind.is_solid() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.kind.shapes() }
        </svg>
    }
}
