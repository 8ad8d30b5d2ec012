use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{use_scroll_reveal, RevealSpec, RevealTarget, VisualState};
use crate::components::footer::Footer;
use crate::components::project_navbar::ProjectNavbar;
use crate::content::{site, ProjectEntry};
use crate::effects::hover_preview::{HoverPreviewList, PreviewEntry};
use crate::Route;

/// Every project except the one being shown, in listing order.
pub fn other_projects<'a>(projects: &'a [ProjectEntry], current: &str) -> Vec<&'a ProjectEntry> {
    projects.iter().filter(|p| p.slug != current).collect()
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: AttrValue,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let content = site();

    // New project, new page: start from the top.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id.clone(),
    );

    match content.find_project(&props.id) {
        Some(project) => html! {
            <div class="project-page">
                <ProjectNavbar />
                <ProjectBody key={project.slug.clone()} project={project.clone()} />
                <Footer
                    owner={content.owner.clone()}
                    contact={content.contact.clone()}
                    socials={content.socials.clone()}
                />
            </div>
        },
        None => {
            log::warn!("Unknown project {}", props.id);
            html! { <ProjectMissing /> }
        }
    }
}

#[function_component(ProjectMissing)]
fn project_missing() -> Html {
    html! {
        <main class="project-missing">
            <h1>{"Project not found"}</h1>
            <Link<Route> to={Route::Home} classes="cursor-hover">
                {"Return to home"}
            </Link<Route>>
            <style>
                {r#"
                .project-missing {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .project-missing h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    color: var(--heading);
                }
                .project-missing a {
                    color: var(--link);
                }
                "#}
            </style>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectBodyProps {
    project: ProjectEntry,
}

#[function_component(ProjectBody)]
fn project_body(props: &ProjectBodyProps) -> Html {
    let project = &props.project;
    let header = use_node_ref();
    let gallery = use_node_ref();
    let navigator = use_navigator();

    use_scroll_reveal(
        header.clone(),
        RevealSpec {
            from: VisualState::hidden_below(40.0),
            stagger_ms: 120.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );
    use_scroll_reveal(
        gallery.clone(),
        RevealSpec {
            from: VisualState::hidden_below(60.0),
            duration_ms: 800.0,
            stagger_ms: 200.0,
            target: RevealTarget::Children,
            ..RevealSpec::default()
        },
    );

    let others = other_projects(&site().projects, &project.slug);
    let more_work: Vec<PreviewEntry> = others.iter().map(|p| PreviewEntry::from(*p)).collect();
    let slugs: Vec<String> = others.iter().map(|p| p.slug.clone()).collect();
    let on_select = navigator.map(|navigator| {
        Callback::from(move |index: usize| {
            if let Some(id) = slugs.get(index) {
                navigator.push(&Route::Project { id: id.clone() });
            }
        })
    });

    let hero_image = project
        .images
        .first()
        .cloned()
        .or_else(|| project.media.poster.clone())
        .unwrap_or_else(|| project.media.src.clone());

    html! {
        <main class="project-main">
            <div class="project-hero bg-black" style={format!("--accent: {};", project.color)}>
                <div ref={header} class="project-header">
                    <div class="project-meta">
                        <span>{ &project.year }</span>
                        <span class="dot">{"•"}</span>
                        <span>{ &project.category }</span>
                    </div>
                    <h1>{ &project.title }</h1>
                    <h2>{ &project.company }</h2>
                    <div class="project-actions">
                        { for project.live_url.iter().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="glass-button cursor-hover">
                                {"View Live Site ↗"}
                            </a>
                        }) }
                        { for project.case_study_url.iter().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="outline-button cursor-hover">
                                {"Case Study"}
                            </a>
                        }) }
                    </div>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span class="project-tag">{ tag }</span> }) }
                    </div>
                </div>
            </div>

            <div class="project-content">
                <div class="frosted-glass">
                    <img class="project-hero-image" src={hero_image} alt={format!("{} hero image", project.title)} />
                </div>

                <div class="frosted-glass">
                    <h3>{"Overview"}</h3>
                    <p class="lead">{ &project.full_description }</p>
                    <p>{ &project.description }</p>
                </div>

                <div ref={gallery} class="project-gallery">
                    { for project.images.iter().skip(1).enumerate().map(|(i, image)| html! {
                        <div class="frosted-glass">
                            <img src={image.clone()} alt={format!("{} image {}", project.title, i + 2)} />
                        </div>
                    }) }
                </div>

                <div class="more-work">
                    <h3>{"More work"}</h3>
                    <HoverPreviewList items={more_work} {on_select} />
                </div>

                <div class="project-links">
                    <a href="/#work" class="cursor-hover">{"← View All Projects"}</a>
                    <a href="#contact" class="cursor-hover">{"Let's Work Together →"}</a>
                </div>
            </div>
            <style>
                {r#"
                .project-hero {
                    background: #000000;
                    color: #ffffff;
                    padding: 9rem 1.5rem 5rem;
                }
                .project-header {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .project-meta {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    opacity: 0.8;
                }
                .project-header h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 300;
                    margin-bottom: 1rem;
                }
                .project-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    opacity: 0.8;
                    margin-bottom: 1.5rem;
                }
                .project-actions {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .outline-button {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    color: #ffffff;
                    text-decoration: none;
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    background: var(--accent);
                    color: #000000;
                }
                .project-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .frosted-glass {
                    padding: 2rem;
                    margin-bottom: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(0, 0, 0, 0.06);
                    backdrop-filter: blur(16px);
                }
                .frosted-glass img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }
                .frosted-glass .project-hero-image {
                    height: 24rem;
                }
                .frosted-glass h3, .more-work h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.875rem;
                    color: var(--heading);
                    margin-bottom: 1.5rem;
                }
                .frosted-glass p {
                    color: var(--body);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .frosted-glass .lead {
                    font-size: 1.125rem;
                }
                .project-gallery {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 2rem;
                }
                .more-work {
                    margin-top: 4rem;
                }
                .project-links {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e5e7eb;
                }
                .project-links a {
                    color: var(--link);
                    text-decoration: none;
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_projects_skip_current() {
        let projects = &site().projects;
        let others = other_projects(projects, "quillbot");
        assert_eq!(others.len(), projects.len() - 1);
        assert!(others.iter().all(|p| p.slug != "quillbot"));
    }

    #[test]
    fn unknown_slug_keeps_everything() {
        let projects = &site().projects;
        assert_eq!(other_projects(projects, "does-not-exist").len(), projects.len());
    }
}
