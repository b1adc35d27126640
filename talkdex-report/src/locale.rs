//! Fixed per-language strings for the generated fragments

use talkdex_core::Language;

/// Heading prefix of a previously generated statistics block, in any language
pub const STATS_BLOCK_MARKER: &str = "## 📊";

/// Every string a rendered fragment needs for one language
#[derive(Debug)]
pub struct Labels {
    /// Heading the generated index starts at
    pub index_marker: &'static str,
    /// Heading the generated index stops before
    pub end_marker: &'static str,
    pub stats_heading: &'static str,
    pub total_talks: &'static str,
    pub past: &'static str,
    pub upcoming: &'static str,
    pub active_years: &'static str,
    pub top_topics: &'static str,
    pub index_intro: &'static str,
    pub table_header: &'static str,
    pub table_rule: &'static str,
    pub coming_soon_heading: &'static str,
    pub coming_soon_body: &'static str,
    pub topics_heading: &'static str,
    /// Link label for this language's companion document
    pub companion_label: &'static str,
    /// Companion document inside each talk entry
    pub companion_file: &'static str,
}

static ENGLISH: Labels = Labels {
    index_marker: "## 📑 Talks Index",
    end_marker: "## 🤝 Contributing",
    stats_heading: "## 📊 Statistics",
    total_talks: "🎤 **Total Talks**",
    past: "✅ **Past**",
    upcoming: "🔜 **Upcoming**",
    active_years: "📅 **Active Years**",
    top_topics: "🏷️ **Top Topics**",
    index_intro: "Browse all talks by year, topic, and event. Click on any talk to access the full demo, code, and materials.",
    table_header: "| Date | Talk Title | Topics | Event/Location | Materials |",
    table_rule: "|------|------------|--------|----------------|-----------|",
    coming_soon_heading: "### Coming Soon 🚀",
    coming_soon_body: "More talks and demos will be added here as they happen!",
    topics_heading: "## 🏷️ Browse by Topic",
    companion_label: "EN",
    companion_file: "README.md",
};

static SPANISH: Labels = Labels {
    index_marker: "## 📑 Índice de Charlas",
    end_marker: "## 🤝 Contribuir",
    stats_heading: "## 📊 Estadísticas",
    total_talks: "🎤 **Total de Charlas**",
    past: "✅ **Pasadas**",
    upcoming: "🔜 **Próximas**",
    active_years: "📅 **Años Activos**",
    top_topics: "🏷️ **Temas Principales**",
    index_intro: "Explora todas las charlas por año, tema y evento. Haz clic en cualquier charla para acceder a la demo completa, código y materiales.",
    table_header: "| Fecha | Título de la Charla | Temas | Evento/Ubicación | Materiales |",
    table_rule: "|-------|---------------------|-------|------------------|------------|",
    coming_soon_heading: "### Próximamente 🚀",
    coming_soon_body: "¡Más charlas y demos se agregarán aquí a medida que sucedan!",
    topics_heading: "## 🏷️ Buscar por Tema",
    companion_label: "ES",
    companion_file: "README-es.md",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    }
}
