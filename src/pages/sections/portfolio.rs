use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::{PORTFOLIO_SECTION, Project, ProjectId};
use crate::hooks::escape::use_escape;
use crate::state::selection::{overlay_action, OverlayTarget, PortfolioSelection, SelectionAction};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selection = use_reducer(PortfolioSelection::default);

    let on_select = {
        let selection = selection.dispatcher();
        Callback::from(move |id: ProjectId| selection.dispatch(SelectionAction::Select(id)))
    };

    let on_dismiss = {
        let selection = selection.dispatcher();
        Callback::from(move |action: SelectionAction| selection.dispatch(action))
    };

    html! {
        <section id={PORTFOLIO_SECTION} class="section portfolio">
            <div class="container">
                <Reveal class="portfolio-heading">
                    <div>
                        <h2 class="eyebrow">{"Our Portfolio"}</h2>
                        <h3 class="section-title">{"Recent Projects We've Completed"}</h3>
                    </div>
                    <a href="#portfolio" class="btn-ghost">{"View All Projects"}</a>
                </Reveal>

                <div class="portfolio-grid">
                    { for ProjectId::all().map(|id| html! {
                        <ProjectCard key={id.index()} id={id} on_select={on_select.clone()} />
                    }) }
                </div>
            </div>

            {
                match selection.project() {
                    Some(project) => html! { <ProjectModal project={project} on_dismiss={on_dismiss} /> },
                    None => html! {},
                }
            }

            <style>
                {r#"
                .portfolio {
                    margin: 2.5rem 1rem;
                    border-radius: 60px;
                    background: var(--dark);
                    color: #ffffff;
                }

                .portfolio-heading {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .portfolio-heading .section-title {
                    max-width: 36rem;
                    margin: 0;
                }

                .portfolio-grid {
                    display: grid;
                    gap: 3rem;
                }

                .project-card {
                    cursor: pointer;
                }

                .project-card.revealed:hover {
                    transform: translateY(-10px);
                }

                .project-thumb {
                    position: relative;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                    margin-bottom: 2rem;
                    border-radius: 40px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                }

                .project-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .project-card:hover .project-thumb img {
                    transform: scale(1.1);
                }

                .project-hover {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to top, rgba(15, 23, 42, 0.6), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .project-hover span {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: var(--primary);
                    transform: scale(0);
                    transition: transform 0.5s ease;
                }

                .project-card:hover .project-hover { opacity: 1; }
                .project-card:hover .project-hover span { transform: scale(1); }

                .project-meta {
                    padding: 0 1rem;
                }

                .project-category {
                    margin: 0 0 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--primary);
                }

                .project-meta h4 {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    transition: color 0.3s ease;
                }

                .project-card:hover .project-meta h4 {
                    color: var(--primary);
                }

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: rgba(15, 23, 42, 0.9);
                    backdrop-filter: blur(24px);
                    animation: overlayIn 0.25s ease-out;
                }

                .modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow: auto;
                    display: grid;
                    border-radius: 40px;
                    background: #ffffff;
                    color: var(--dark);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                    animation: modalIn 0.3s ease-out;
                }

                .modal-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 20;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 50%;
                    background: #f1f5f9;
                    color: var(--dark);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .modal-close:hover {
                    background: var(--primary);
                    color: #ffffff;
                }

                .modal-image img {
                    display: block;
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                }

                .modal-body {
                    padding: 2.5rem;
                }

                .modal-body h4 {
                    margin: 0 0 1.5rem;
                    font-size: 2.25rem;
                    font-weight: 800;
                }

                .modal-label {
                    margin: 0 0 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: rgba(15, 23, 42, 0.4);
                }

                .modal-text {
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    color: rgba(15, 23, 42, 0.7);
                }

                .modal-result {
                    padding: 1.5rem;
                    border: 1px solid rgba(59, 130, 246, 0.1);
                    border-radius: 1rem;
                    background: rgba(59, 130, 246, 0.05);
                }

                .modal-result .modal-label {
                    color: var(--primary);
                }

                .modal-result-value {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 800;
                }

                @keyframes overlayIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes modalIn {
                    from { opacity: 0; transform: scale(0.9) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }

                @media (min-width: 768px) {
                    .portfolio-heading {
                        flex-direction: row;
                        align-items: flex-end;
                    }

                    .portfolio-grid,
                    .modal-content {
                        grid-template-columns: 1fr 1fr;
                    }

                    .modal-image img {
                        height: 100%;
                    }

                    .modal-body {
                        padding: 4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    id: ProjectId,
    on_select: Callback<ProjectId>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.id.project();
    let onclick = {
        let id = props.id;
        props.on_select.reform(move |_: MouseEvent| id)
    };

    html! {
        <Reveal delay_ms={stagger_delay(props.id.index())} class="project-card">
            <div onclick={onclick}>
                <div class="project-thumb">
                    <img src={project.image} alt={project.title} referrerpolicy="no-referrer" />
                    <div class="project-hover">
                        <span><Icon kind={IconKind::ArrowRight} /></span>
                    </div>
                </div>
                <div class="project-meta">
                    <p class="project-category">{project.category}</p>
                    <h4>{project.title}</h4>
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    on_dismiss: Callback<SelectionAction>,
}

/// Detail overlay for the selected project. Only mounted while something is
/// selected, so its Escape listener lives exactly as long as the overlay.
#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let ProjectModalProps { project, on_dismiss } = props;

    let respond_on = |target: OverlayTarget| {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let response = overlay_action(target);
            if response.stop_propagation {
                e.stop_propagation();
            }
            if let Some(action) = response.action {
                on_dismiss.emit(action);
            }
        })
    };

    use_escape(on_dismiss.reform(|_: ()| SelectionAction::Clear));

    html! {
        <div class="modal-overlay" onclick={respond_on(OverlayTarget::Backdrop)}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-label={project.title}
                onclick={respond_on(OverlayTarget::Body)}
            >
                <button
                    class="modal-close"
                    aria-label="Close"
                    onclick={respond_on(OverlayTarget::CloseButton)}
                >
                    <Icon kind={IconKind::Close} />
                </button>
                <div class="modal-image">
                    <img src={project.image} alt={project.title} referrerpolicy="no-referrer" />
                </div>
                <div class="modal-body">
                    <p class="project-category">{project.category}</p>
                    <h4>{project.title}</h4>

                    <p class="modal-label">{"The Challenge"}</p>
                    <p class="modal-text">{project.challenge}</p>

                    <p class="modal-label">{"Our Solution"}</p>
                    <p class="modal-text">{project.solution}</p>

                    <div class="modal-result">
                        <p class="modal-label">{"Key Result"}</p>
                        <p class="modal-result-value">{project.results}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
