use yew::prelude::*;

use crate::config::REVEAL_STAGGER_MS;
use crate::hooks::reveal::use_reveal;

/// Direction an element slides in from when it first scrolls into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Scale up in place.
    Center,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-up",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
            RevealFrom::Center => "reveal-zoom",
        }
    }
}

/// Transition delay for the `index`-th item of a grid.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * REVEAL_STAGGER_MS
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.from.class(), revealed.then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), REVEAL_STAGGER_MS);
        assert_eq!(stagger_delay(5), 5 * REVEAL_STAGGER_MS);
    }
}
