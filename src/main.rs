//! Entry point for the locale switching demo.
//!
//! Loads `.site-i18n.json` and the `locales/` tables from the site root
//! (first argument, defaults to the current directory), renders the
//! sample page in the default locale, then switches through any further
//! arguments (`site-i18n . en-us es`).

use std::path::PathBuf;

use site_i18n::LocaleController;
use site_i18n::config::ConfigManager;
use site_i18n::dictionary::load_dictionary;
use site_i18n::types::ElementKind;
use site_i18n::view::{
    PageElement,
    PageView,
};

/// The translatable parts of the landing page.
fn demo_page() -> PageView {
    let mut page = PageView::new();

    for (id, key, text) in [
        ("nav-home", "nav-inicio", "Inicio"),
        ("nav-about", "nav-sobre-nosotros", "Sobre Nosotros"),
        ("nav-services", "nav-servicios", "Servicios"),
        ("nav-gallery", "nav-galeria", "Galería"),
        ("nav-contact", "nav-contacto", "Contacto"),
        ("hero-subtitle", "hero-subtitle", "Especialistas en soluciones eléctricas profesionales"),
        ("about-heading", "about-title", "Sobre Nosotros"),
        ("services-heading", "services-title", "Nuestros Servicios"),
        ("contact-heading", "contact-title", "Contacto"),
        ("contact-form-heading", "contact-form-title", "Envíanos un mensaje"),
        ("send-button", "send-message", "Enviar Mensaje"),
        ("footer", "footer-rights", "Todos los derechos reservados."),
    ] {
        page.push_element(
            PageElement::new(id, ElementKind::DisplayText, Some(key)).with_text(text),
        );
    }

    for (id, key) in [
        ("form-name", "form-name-placeholder"),
        ("form-email", "form-email-placeholder"),
        ("form-message", "form-message-placeholder"),
    ] {
        page.push_element(PageElement::new(id, ElementKind::Placeholder, Some(key)));
    }

    page.push_indicator("language-toggle-colombia", "es");
    page.push_indicator("mobile-language-toggle-colombia", "es");
    page.push_indicator("language-toggle-us", "en-us");
    page.push_indicator("mobile-language-toggle-us", "en-us");

    page
}

fn print_page(page: &PageView, active_locale: &str) {
    println!("--- page ({active_locale}) ---");
    for element in page.elements() {
        if element.placeholder().is_empty() {
            println!("  {:<22} {}", element.id(), element.text());
        } else {
            println!("  {:<22} [placeholder] {}", element.id(), element.placeholder());
        }
    }
    for indicator in page.indicators() {
        let marker = if indicator.is_active() { "*" } else { " " };
        println!("  [{marker}] {} ({})", indicator.id(), indicator.locale());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let site_root = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(site_root.clone()))?;
    let settings = config_manager.get_settings();

    let dictionary = load_dictionary(&site_root.join("locales"), settings)?;
    let mut controller = LocaleController::new(dictionary, settings)?;

    let mut page = demo_page();
    let diagnostics = controller.apply_current(&mut page);
    for diagnostic in &diagnostics {
        tracing::warn!("{}", diagnostic.message);
    }
    print_page(&page, controller.current());

    for locale in args {
        match controller.switch_to(&locale, &mut page) {
            Ok(diagnostics) => {
                for diagnostic in &diagnostics {
                    tracing::warn!("{}", diagnostic.message);
                }
                print_page(&page, controller.current());
            }
            Err(e) => tracing::error!("{e}"),
        }
    }

    Ok(())
}
