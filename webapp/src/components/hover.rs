use dioxus::prelude::*;

use site::hover::HoverEffect;

#[derive(Clone, PartialEq, Props)]
pub struct HoverLinkProps {
    effect: HoverEffect,
    class: String,
    href: String,
    label: String,
    children: Element,
}

// an external link that nudges itself while the pointer is over it
#[component]
pub fn HoverLink(props: HoverLinkProps) -> Element {
    let mut hovered = use_signal(|| false);
    let transform = props.effect.transform(hovered());

    rsx! {
        a {
            class: "{props.class}",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener",
            aria_label: "{props.label}",
            style: "transform: {transform};",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            {props.children}
        }
    }
}

#[component]
pub fn FloatingButtons() -> Element {
    rsx! {
        div { class: "floating-buttons",
            HoverLink {
                effect: HoverEffect::Grow,
                class: "floating-btn",
                href: "https://wa.me/5511999999999",
                label: "WhatsApp",
                "💬"
            }
            HoverLink {
                effect: HoverEffect::Grow,
                class: "floating-btn",
                href: "https://www.instagram.com/syntaxteam",
                label: "Instagram",
                "📷"
            }
        }
    }
}

const SOCIAL: [(&str, &str, &str); 4] = [
    ("Instagram", "@syntaxteam", "https://www.instagram.com/syntaxteam"),
    ("GitHub", "caskdev", "https://github.com/caskdev"),
    ("LinkedIn", "SyntaxTeam", "https://www.linkedin.com/company/syntaxteam"),
    ("E-mail", "contato@syntaxteam.dev", "mailto:contato@syntaxteam.dev"),
];

#[component]
pub fn SocialCards() -> Element {
    rsx! {
        div { class: "social-grid",
            for (network, handle, href) in SOCIAL {
                HoverLink {
                    effect: HoverEffect::Lift,
                    class: "social-card",
                    href: "{href}",
                    label: "{network}",
                    strong { "{network}" }
                    span { "{handle}" }
                }
            }
        }
    }
}
