use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        anchor::AnchorLink,
        carousel::Carousel,
        contact::ContactForm,
        hover::SocialCards,
        modal::{ProjectModal, open_project},
        reveal::use_reveal_on_scroll,
    },
};
use site::{Catalog, Project};

const BENEFITS: [(&str, &str); 3] = [
    ("Design responsivo", "Sites que se adaptam a qualquer tela, do celular ao desktop."),
    ("Performance", "Páginas leves e rápidas, otimizadas para mecanismos de busca."),
    ("Suporte dedicado", "Acompanhamos o seu projeto mesmo depois da entrega."),
];

const SERVICES: [(&str, &str); 4] = [
    ("Sites institucionais", "Presença digital profissional para empresas e ministérios."),
    ("Portfólios", "Vitrines visuais para artistas, equipes e profissionais."),
    ("Plataformas educacionais", "Áreas de aluno, agendamento e materiais interativos."),
    ("Lojas e vitrines", "Catálogos de produtos com a identidade da sua marca."),
];

const PROCESS: [(&str, &str); 4] = [
    ("1. Conversa", "Entendemos o seu negócio e os objetivos do site."),
    ("2. Proposta", "Definimos escopo, prazos e identidade visual."),
    ("3. Desenvolvimento", "Construímos e validamos cada página com você."),
    ("4. Publicação", "Colocamos o site no ar e acompanhamos os resultados."),
];

const VALUES: [(&str, &str); 3] = [
    ("Transparência", "Você acompanha cada etapa do projeto."),
    ("Qualidade", "Código limpo e boas práticas em cada entrega."),
    ("Compromisso", "Prazos cumpridos e comunicação constante."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("O novo site trouxe muito mais alunos para a escola.", "Papo com Inglês"),
    ("Minha galeria finalmente ficou do jeito que eu imaginava.", "A.K.A.S.A.D.O.K"),
];

const WHY_US: [(&str, &str); 3] = [
    ("Equipe jovem", "Atualizada com as tecnologias mais recentes."),
    ("Preço justo", "Projetos sob medida para o seu orçamento."),
    ("Atendimento próximo", "Fale diretamente com quem desenvolve."),
];

#[derive(Clone, PartialEq, Props)]
struct CardListProps {
    class: String,
    cards: Vec<(&'static str, &'static str)>,
}

#[component]
fn CardList(props: CardListProps) -> Element {
    rsx! {
        div { class: "card-grid",
            for (title, text) in props.cards.iter() {
                div { class: "{props.class}",
                    h3 { "{title}" }
                    p { "{text}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let catalog = use_context::<Catalog>();
    let id = props.project.id;

    rsx! {
        div { class: "project-card",
            h3 { "{props.project.title}" }
            p { "{props.project.description}" }
            button {
                class: "btn btn-outline",
                "data-project": "{id}",
                onclick: move |_| open_project(&catalog, id),
                "Ver detalhes"
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let catalog = use_context::<Catalog>();

    use_reveal_on_scroll();

    rsx! {
        main {
            section { id: "inicio", class: "hero",
                div { class: "container",
                    h1 { "Sites que colocam o seu negócio em evidência" }
                    p {
                        "Somos a SyntaxTeam: criamos sites institucionais, portfólios e plataformas sob medida."
                    }
                    AnchorLink { href: "#contato", class: "btn btn-primary", "Solicite um orçamento" }
                }
            }

            section { id: "sobre", class: "section",
                div { class: "container",
                    h2 { class: "section-title", "Por que ter um site profissional" }
                    CardList { class: "benefit-card", cards: BENEFITS.to_vec() }
                    h2 { class: "section-title", style: "margin-top: var(--space-12);", "Nossos valores" }
                    CardList { class: "value-card", cards: VALUES.to_vec() }
                }
            }

            section { id: "servicos", class: "section section-alt",
                div { class: "container",
                    h2 { class: "section-title", "Serviços" }
                    CardList { class: "service-card", cards: SERVICES.to_vec() }
                    h2 { class: "section-title", style: "margin-top: var(--space-12);", "Como trabalhamos" }
                    CardList { class: "process-step", cards: PROCESS.to_vec() }
                }
            }

            section { id: "projetos", class: "section",
                div { class: "container",
                    h2 { class: "section-title", "Projetos" }
                    div { class: "card-grid",
                        for project in catalog.iter() {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                    h2 { class: "section-title", style: "margin-top: var(--space-12);", "Galeria" }
                    Carousel {}
                }
            }

            section { id: "depoimentos", class: "section section-alt",
                div { class: "container",
                    h2 { class: "section-title", "Depoimentos" }
                    div { class: "card-grid",
                        for (quote, author) in TESTIMONIALS {
                            blockquote { class: "testimonial-card",
                                p { "“{quote}”" }
                                cite { "{author}" }
                            }
                        }
                    }
                    h2 { class: "section-title", style: "margin-top: var(--space-12);", "Por que a SyntaxTeam" }
                    CardList { class: "why-us-card", cards: WHY_US.to_vec() }
                }
            }

            section { id: "contato", class: "section",
                div { class: "container",
                    h2 { class: "section-title", "Contato" }
                    ContactForm {}
                    h2 { class: "section-title", style: "margin-top: var(--space-12);", "Redes sociais" }
                    SocialCards {}
                }
            }
        }

        ProjectModal {}
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "not-found",
            div { class: "container",
                h1 { "Página não encontrada" }
                p { "Não existe nada em /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Voltar ao início" }
            }
        }
    }
}
