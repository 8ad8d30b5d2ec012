use yew::prelude::*;

use crate::animation::easing::Easing;
use crate::animation::reveal::{use_scroll_reveal, Edge, RevealSpec, RevealTarget, Threshold, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
    Lines,
}

/// Pieces that get animated one by one. Spaces become non-breaking so inline
/// blocks keep their width.
pub fn split(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Chars => text
            .chars()
            .map(|c| if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() })
            .collect(),
        SplitMode::Words => text.split(' ').filter(|w| !w.is_empty()).map(str::to_string).collect(),
        SplitMode::Lines => text.split('\n').map(str::to_string).collect(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub mode: SplitMode,
    /// Delay between consecutive pieces.
    #[prop_or(30.0)]
    pub stagger_ms: f64,
    #[prop_or(600.0)]
    pub duration_ms: f64,
    #[prop_or(Threshold::new(Edge::Top, 0.9))]
    pub threshold: Threshold,
}

/// Text that rises in piece by piece the first time it scrolls into view.
#[function_component(SplitText)]
pub fn split_text(props: &SplitTextProps) -> Html {
    let node = use_node_ref();
    use_scroll_reveal(
        node.clone(),
        RevealSpec {
            threshold: props.threshold,
            from: VisualState::hidden_below(40.0),
            to: VisualState::VISIBLE,
            duration_ms: props.duration_ms,
            stagger_ms: props.stagger_ms,
            delay_ms: 0.0,
            easing: Easing::Power3Out,
            target: RevealTarget::Children,
        },
    );

    let pieces = split(&props.text, props.mode);
    html! {
        <>
            <div ref={node} class={classes!("split-text", props.class.clone())} aria-label={props.text.clone()}>
                { for pieces.into_iter().map(|piece| match props.mode {
                    SplitMode::Lines => html! { <div class="split-piece" aria-hidden="true">{ piece }</div> },
                    SplitMode::Words => html! { <span class="split-piece split-word" aria-hidden="true">{ piece }</span> },
                    SplitMode::Chars => html! { <span class="split-piece" aria-hidden="true">{ piece }</span> },
                }) }
            </div>
            <style>
                {r#"
                .split-piece {
                    display: inline-block;
                    will-change: transform, opacity;
                }
                .split-word {
                    margin-right: 0.25em;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_keep_spaces_as_nbsp() {
        assert_eq!(split("Hi !", SplitMode::Chars), vec!["H", "i", "\u{00A0}", "!"]);
    }

    #[test]
    fn words_skip_repeated_spaces() {
        assert_eq!(split("make  something lovely", SplitMode::Words), vec!["make", "something", "lovely"]);
    }

    #[test]
    fn lines_split_on_newlines() {
        assert_eq!(split("one\ntwo", SplitMode::Lines), vec!["one", "two"]);
    }
}
