//! docs::builtin
//!
//! The GitWit documentation site.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::locale::{EditLink, Footer, LastUpdated, LocaleConfig, Logo, NavItem, SidebarSection};
use super::site::{Appearance, SiteConfig, SocialLink, ROOT_LOCALE};

const REPOSITORY: &str = "https://github.com/rafandoo/gitwit";
const EDIT_PATTERN: &str = "https://github.com/rafandoo/gitwit/edit/main/src/main/docs/:path";
const COPYRIGHT: &str =
    "Copyright © 2025-present <a href=\"https://rafandoo.github.io/\">Rafael Camargo</a>";

static SITE: LazyLock<SiteConfig> = LazyLock::new(build);

/// Label of the version dropdown in the navigation bar.
fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

fn logo() -> Logo {
    Logo {
        src: "/logo.webp".into(),
        width: 50,
        height: 50,
    }
}

fn translations(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn english() -> LocaleConfig {
    LocaleConfig {
        lang: "en-US".into(),
        label: "English".into(),
        description: "An application to help you with commit standardization.".into(),
        logo: Some(logo()),
        nav: vec![
            NavItem::link("Home", "/"),
            NavItem::link("Guide", "/guide/getting-started"),
            NavItem::menu(&version_label(), &[("Changelog", "/other/changelog")]),
        ],
        sidebar: vec![
            SidebarSection::new(
                "Guide",
                "/guide",
                &[
                    ("What is GitWit?", "/what-is"),
                    ("Getting Started", "/getting-started"),
                ],
            ),
            SidebarSection::new(
                "Reference",
                "/reference",
                &[("Configuration", "/configuration"), ("Commands", "/commands")],
            ),
            SidebarSection::new(
                "Other",
                "/other",
                &[("Changelog", "/changelog"), ("License", "/license")],
            )
            .collapsed(),
        ],
        footer: Footer {
            message: "Released under the Apache License.".into(),
            copyright: COPYRIGHT.into(),
        },
        edit_link: Some(EditLink {
            pattern: EDIT_PATTERN.into(),
            text: "Edit this page on GitHub".into(),
        }),
        last_updated: Some(LastUpdated {
            text: None,
            date_style: "short".into(),
            time_style: "medium".into(),
        }),
        translations: IndexMap::new(),
    }
}

fn portuguese() -> LocaleConfig {
    LocaleConfig {
        lang: "pt-BR".into(),
        label: "Português".into(),
        description: "Uma aplicação para ajudar você com a padronização de commits.".into(),
        logo: Some(logo()),
        nav: vec![
            NavItem::link("Home", "/pt"),
            NavItem::link("Guia", "/pt/guide/getting-started"),
            NavItem::menu(&version_label(), &[("Changelog", "/pt/other/changelog")]),
        ],
        sidebar: vec![
            SidebarSection::new(
                "Guia",
                "/pt/guide",
                &[
                    ("O que é GitWit?", "/what-is"),
                    ("Primeiros passos", "/getting-started"),
                ],
            ),
            SidebarSection::new(
                "Referência",
                "/pt/reference",
                &[("Configuração", "/configuration"), ("Comandos", "/commands")],
            ),
            SidebarSection::new(
                "Outros",
                "/pt/other",
                &[("Changelog", "/changelog"), ("Licença", "/license")],
            )
            .collapsed(),
        ],
        footer: Footer {
            message: "Lançado sob a Licença Apache.".into(),
            copyright: COPYRIGHT.into(),
        },
        edit_link: Some(EditLink {
            pattern: EDIT_PATTERN.into(),
            text: "Edite essa página no GitHub".into(),
        }),
        last_updated: Some(LastUpdated {
            text: Some("Ultima atualização".into()),
            date_style: "short".into(),
            time_style: "medium".into(),
        }),
        translations: translations(&[
            ("docFooter.prev", "Anterior"),
            ("docFooter.next", "Próximo"),
            ("outline.label", "Nesta página"),
            ("search.button.buttonText", "Pesquisar"),
            ("search.button.buttonAriaLabel", "Pesquisar"),
            ("search.modal.displayDetails", "Exibir detalhes"),
            ("search.modal.resetButtonTitle", "Resultados da pesquisa"),
            ("search.modal.backButtonTitle", "Fechar pesquisa"),
            ("search.modal.noResultsText", "Nenhum resultado encontrado para"),
            ("search.modal.footer.selectText", "selecionar"),
            ("search.modal.footer.selectKeyAriaLabel", "entrar"),
            ("search.modal.footer.navigateText", "navegar"),
            ("search.modal.footer.navigateUpKeyAriaLabel", "seta para cima"),
            ("search.modal.footer.navigateDownKeyAriaLabel", "seta para baixo"),
            ("search.modal.footer.closeText", "fechar"),
            ("search.modal.footer.closeKeyAriaLabel", "esc"),
            ("langMenuLabel", "Idioma"),
            ("returnToTopLabel", "Voltar ao topo"),
            ("sidebarMenuLabel", "Menu lateral"),
            ("darkModeSwitchLabel", "Modo escuro"),
            ("lightModeSwitchTitle", "Alternar para o modo claro"),
            ("darkModeSwitchTitle", "Alternar para o modo escuro"),
            ("notFound.title", "Página não encontrada"),
            (
                "notFound.quote",
                "Parece que você está perdido. A página que você está procurando não existe ou foi movida.",
            ),
            ("notFound.linkLabel", "Voltar para a página inicial"),
        ]),
    }
}

fn build() -> SiteConfig {
    SiteConfig {
        title: "GitWit".into(),
        base: "/gitwit/".into(),
        appearance: Appearance::Dark,
        favicon: "/gitwit/favicon.ico".into(),
        search_provider: "local".into(),
        social_links: vec![SocialLink {
            icon: "github".into(),
            link: REPOSITORY.into(),
        }],
        locales: IndexMap::from([
            (ROOT_LOCALE.to_string(), english()),
            ("pt".to_string(), portuguese()),
        ]),
    }
}

impl SiteConfig {
    /// The GitWit documentation site, built once.
    pub fn builtin() -> &'static SiteConfig {
        &SITE
    }
}
