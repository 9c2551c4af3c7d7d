//! Terminal entry point for the product tag designer.

use anyhow::Context;

use tagforge_desktop::{EditorConfig, Shell, TagEditor};
use tagforge_infra::{InMemoryProductStore, LocalImageSource, RandomIdentifierSource};
use tagforge_preview::TextTagRenderer;

fn main() -> anyhow::Result<()> {
    tagforge_observability::init();

    let config = EditorConfig::from_env();
    tracing::info!(
        identifier_length = config.identifier_length,
        start_blank = config.start_blank,
        "starting tag designer"
    );

    let editor = TagEditor::new(
        &config,
        InMemoryProductStore::new(),
        RandomIdentifierSource::new(config.identifier_length),
    );
    let renderer = TextTagRenderer::new(config.currency_symbol.clone());
    let mut shell = Shell::new(editor, LocalImageSource::new(), renderer);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell
        .run(stdin.lock(), stdout.lock())
        .context("terminal session failed")?;

    tracing::info!("tag designer closed");
    Ok(())
}
