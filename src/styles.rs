use stylist::yew::Global;
use yew::prelude::*;

/// Theme shared by every section: palette, layout helpers, buttons and the
/// reveal-on-scroll transitions. Section-specific rules live next to their
/// components.
const THEME: &str = r#"
:root {
    --primary: #3b82f6;
    --secondary: #8b5cf6;
    --dark: #0f172a;
    --gradient: linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%);
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: "Plus Jakarta Sans", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--dark);
    background: #ffffff;
    -webkit-font-smoothing: antialiased;
}

*, *::before, *::after {
    box-sizing: border-box;
}

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section {
    padding: 6rem 0;
}

.section-muted {
    background: #f8fafc;
}

.section-heading {
    max-width: 42rem;
    margin: 0 auto 5rem;
    text-align: center;
}

.eyebrow {
    margin: 0 0 1rem;
    font-size: 0.875rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--primary);
}

.section-title {
    margin: 0 0 1.5rem;
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 800;
    line-height: 1.15;
}

.section-lead {
    font-size: 1.125rem;
    line-height: 1.7;
    color: rgba(15, 23, 42, 0.6);
}

.gradient-text {
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}

.logo {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: -0.05em;
    text-decoration: none;
}

.logo-mark {
    width: 3rem;
    height: 2.5rem;
    filter: drop-shadow(0 4px 6px rgba(15, 23, 42, 0.1));
}

.btn-gradient,
.btn-outline,
.btn-ghost {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font: inherit;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.2s ease;
}

.btn-gradient {
    border: none;
    color: #ffffff;
    background: var(--gradient);
    box-shadow: 0 20px 25px rgba(59, 130, 246, 0.3);
}

.btn-gradient:hover {
    transform: translateY(-4px);
    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.35);
}

.btn-outline {
    border: 2px solid rgba(59, 130, 246, 0.2);
    color: var(--primary);
}

.btn-outline:hover {
    background: rgba(59, 130, 246, 0.05);
}

.btn-ghost {
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: #ffffff;
}

.btn-ghost:hover {
    background: rgba(255, 255, 255, 0.1);
}

.glass-card {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.4);
    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
}

.stars {
    display: flex;
    color: #facc15;
}

.stars .icon {
    width: 1rem;
    height: 1rem;
}

.icon {
    width: 1.5rem;
    height: 1.5rem;
    flex-shrink: 0;
}

.reveal {
    opacity: 0;
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal-up { transform: translateY(30px); }
.reveal-left { transform: translateX(-50px); }
.reveal-right { transform: translateX(50px); }
.reveal-zoom { transform: scale(0.8); }

.reveal.revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}
"#;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! { <Global css={THEME} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist::StyleSource;
    use yew::html::IntoPropValue;

    #[test]
    fn test_theme_is_accepted_as_global_css() {
        let from_theme: StyleSource = THEME.into_prop_value();
        let again: StyleSource = THEME.into_prop_value();
        assert!(from_theme == again);
        assert!(THEME.contains(".reveal.revealed"));
    }
}
