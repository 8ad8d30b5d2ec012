use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{PlaygroundItem, ProjectEntry};

/// Gap between the pointer and the panel's top-left corner.
pub const PREVIEW_OFFSET: (f64, f64) = (24.0, 24.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPanel {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Show/hide state of the floating preview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverPreview {
    panel: Option<PreviewPanel>,
}

impl HoverPreview {
    pub fn enter(&mut self, index: usize, pointer: (f64, f64)) {
        self.panel = Some(Self::place(index, pointer));
    }

    /// Follows the pointer only while something is hovered.
    pub fn track(&mut self, pointer: (f64, f64)) {
        if let Some(panel) = self.panel {
            self.panel = Some(Self::place(panel.index, pointer));
        }
    }

    /// Leaving item `index`. A stale leave from another item is ignored.
    pub fn leave(&mut self, index: usize) {
        if self.panel.map(|p| p.index) == Some(index) {
            self.panel = None;
        }
    }

    pub fn panel(&self) -> Option<PreviewPanel> {
        self.panel
    }

    fn place(index: usize, pointer: (f64, f64)) -> PreviewPanel {
        PreviewPanel {
            index,
            x: pointer.0 + PREVIEW_OFFSET.0,
            y: pointer.1 + PREVIEW_OFFSET.1,
        }
    }
}

fn pointer(e: &MouseEvent) -> (f64, f64) {
    (e.client_x() as f64, e.client_y() as f64)
}

/// A hoverable row and the image its preview shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    pub title: String,
    pub description: String,
    pub badge: String,
    pub color: String,
    pub image: String,
}

impl From<&PlaygroundItem> for PreviewEntry {
    fn from(item: &PlaygroundItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            badge: item.icon.clone(),
            color: item.color.clone(),
            image: item.preview.clone(),
        }
    }
}

impl From<&ProjectEntry> for PreviewEntry {
    fn from(project: &ProjectEntry) -> Self {
        Self {
            title: project.title.clone(),
            description: project.category.clone(),
            badge: project.year.clone(),
            color: project.background_color.clone(),
            image: project.media.poster.clone().unwrap_or_else(|| project.media.src.clone()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverPreviewListProps {
    pub items: Vec<PreviewEntry>,
    #[prop_or_default]
    pub list_ref: NodeRef,
    #[prop_or_default]
    pub on_select: Option<Callback<usize>>,
}

/// List of entries with a preview image that follows the pointer.
#[function_component(HoverPreviewList)]
pub fn hover_preview_list(props: &HoverPreviewListProps) -> Html {
    let preview = use_state_eq(HoverPreview::default);

    let onmousemove = {
        let preview = preview.clone();
        Callback::from(move |e: MouseEvent| {
            let mut next = *preview;
            next.track(pointer(&e));
            preview.set(next);
        })
    };

    let panel = preview.panel().and_then(|panel| {
        props.items.get(panel.index).map(|item| {
            html! {
                <div
                    class="hover-preview"
                    style={format!("left: {:.1}px; top: {:.1}px; background: {};", panel.x, panel.y, item.color)}
                >
                    <img src={item.image.clone()} alt={item.title.clone()} />
                </div>
            }
        })
    });

    html! {
        <>
            <div ref={props.list_ref.clone()} class="hover-preview-list" {onmousemove}>
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let onmouseenter = {
                        let preview = preview.clone();
                        Callback::from(move |e: MouseEvent| {
                            let mut next = *preview;
                            next.enter(index, pointer(&e));
                            preview.set(next);
                        })
                    };
                    let onmouseleave = {
                        let preview = preview.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *preview;
                            next.leave(index);
                            preview.set(next);
                        })
                    };
                    let onclick = props.on_select.clone().map(|on_select| {
                        Callback::from(move |_: MouseEvent| on_select.emit(index))
                    });
                    html! {
                        <div
                            class={classes!("preview-row", "cursor-hover", onclick.is_some().then(|| "cursor-pointer"))}
                            {onmouseenter}
                            {onmouseleave}
                            {onclick}
                        >
                            <div class="preview-row-head">
                                <h3>{ &item.title }</h3>
                                <span class="preview-badge">{ &item.badge }</span>
                            </div>
                            <p>{ &item.description }</p>
                        </div>
                    }
                }) }
            </div>
            { panel.unwrap_or_default() }
            <style>
                {r#"
                .hover-preview {
                    position: fixed;
                    width: 240px;
                    height: 160px;
                    padding: 8px;
                    border-radius: 16px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                    pointer-events: none;
                    z-index: 50;
                    overflow: hidden;
                }
                .hover-preview img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 10px;
                }
                .preview-row {
                    border-bottom: 1px solid #e5e7eb;
                    padding-bottom: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .preview-row-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                }
                .preview-row h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.875rem;
                    font-weight: 600;
                    letter-spacing: -0.06em;
                    transition: color 0.5s;
                }
                .preview-row:hover h3 {
                    color: var(--link);
                }
                .preview-badge {
                    font-size: 2.25rem;
                    font-family: monospace;
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
    fn panel_sits_at_pointer_plus_offset() {
        let mut preview = HoverPreview::default();
        preview.enter(2, (100.0, 50.0));
        assert_eq!(
            preview.panel(),
            Some(PreviewPanel { index: 2, x: 124.0, y: 74.0 })
        );
    }

    #[test]
    fn follows_pointer_while_hovered() {
        let mut preview = HoverPreview::default();
        preview.enter(0, (0.0, 0.0));
        preview.track((300.0, 200.0));
        assert_eq!(preview.panel().map(|p| (p.x, p.y)), Some((324.0, 224.0)));
    }

    #[test]
    fn ignores_movement_when_nothing_hovered() {
        let mut preview = HoverPreview::default();
        preview.track((300.0, 200.0));
        assert_eq!(preview.panel(), None);
    }

    #[test]
    fn leaving_hides_panel() {
        let mut preview = HoverPreview::default();
        preview.enter(1, (0.0, 0.0));
        preview.leave(1);
        assert_eq!(preview.panel(), None);
    }

    #[test]
    fn stale_leave_keeps_new_item() {
        let mut preview = HoverPreview::default();
        preview.enter(1, (0.0, 0.0));
        preview.enter(2, (10.0, 10.0));
        preview.leave(1);
        assert_eq!(preview.panel().map(|p| p.index), Some(2));
    }
}
