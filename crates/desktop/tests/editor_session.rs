//! Editor session behaviour across the boundaries, driven the way the shell
//! and a GUI would drive it.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tagforge_core::ProductId;
use tagforge_desktop::{EditorConfig, EditorError, Shell, TagEditor};
use tagforge_infra::{
    BoundaryError, IdentifierSource, ImageSource, InMemoryProductStore, LocalImageSource,
    ProductStore, RandomIdentifierSource,
};
use tagforge_preview::{ChangeCause, TextTagRenderer};
use tagforge_products::{ProductDraft, ProductField, StoredProduct};

/// Store that fails while `offline` is set, then delegates.
#[derive(Debug, Default)]
struct FlakyStore {
    offline: AtomicBool,
    inner: InMemoryProductStore,
}

impl FlakyStore {
    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), BoundaryError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BoundaryError::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl ProductStore for FlakyStore {
    fn create(&self, product: ProductDraft) -> Result<StoredProduct, BoundaryError> {
        self.check()?;
        self.inner.create(product)
    }

    fn get(&self, id: ProductId) -> Result<Option<StoredProduct>, BoundaryError> {
        self.check()?;
        self.inner.get(id)
    }

    fn list(&self) -> Result<Vec<StoredProduct>, BoundaryError> {
        self.check()?;
        self.inner.list()
    }
}

#[derive(Debug)]
struct BrokenGenerator;

impl IdentifierSource for BrokenGenerator {
    fn generate(&self) -> Result<String, BoundaryError> {
        Err(BoundaryError::unavailable("generator offline"))
    }
}

#[derive(Debug)]
struct FixedImage(&'static str);

impl ImageSource for FixedImage {
    fn acquire(&self, _path: &Path) -> Result<String, BoundaryError> {
        Ok(self.0.to_string())
    }
}

fn blank_config() -> EditorConfig {
    EditorConfig {
        start_blank: true,
        ..EditorConfig::default()
    }
}

#[test]
fn typing_updates_the_preview_after_every_keystroke() {
    let mut editor = TagEditor::new(
        &blank_config(),
        InMemoryProductStore::new(),
        RandomIdentifierSource::seeded(13, 3),
    );
    let updates = editor.subscribe();

    for prefix in ["1", "12", "123"] {
        editor.edit(ProductField::Identifier, prefix);
        assert_eq!(editor.view().pattern().len(), prefix.len());
        assert_eq!(editor.view().caption(), prefix);
    }
    editor.edit(ProductField::Price, "12.5");
    editor.edit(ProductField::Name, "Mug");

    assert_eq!(editor.view().display_price(), "12.50");
    assert_eq!(editor.view().display_name(), "Mug");

    let received = updates.drain();
    assert_eq!(received.len(), 5);
    assert!(
        received
            .windows(2)
            .all(|pair| pair[0].revision + 1 == pair[1].revision)
    );
    assert_eq!(
        received.last().map(|u| u.cause),
        Some(ChangeCause::FieldEdited {
            field: ProductField::Name
        })
    );
}

#[test]
fn failed_save_keeps_the_draft_and_retry_succeeds() {
    let store = Arc::new(FlakyStore::default());
    let mut editor = TagEditor::new(
        &EditorConfig::default(),
        store.clone(),
        RandomIdentifierSource::seeded(13, 4),
    );
    editor.edit(ProductField::Price, 19.99);
    let draft_before = editor.product().clone();
    let view_before = editor.view().clone();

    store.set_offline(true);
    let err = editor.save().unwrap_err();

    assert!(matches!(err, EditorError::Save(BoundaryError::Unavailable(_))));
    assert_eq!(editor.product(), &draft_before);
    assert_eq!(editor.view(), &view_before);
    assert!(editor.saved().is_none());

    store.set_offline(false);
    let stored = editor.save().unwrap().clone();

    assert_eq!(stored.product, draft_before);
    assert_eq!(store.list().unwrap(), vec![stored]);
}

#[test]
fn failed_identifier_generation_changes_nothing() {
    let mut editor = TagEditor::new(
        &EditorConfig::default(),
        InMemoryProductStore::new(),
        BrokenGenerator,
    );
    let updates = editor.subscribe();
    let view_before = editor.view().clone();

    let err = editor.generate_identifier().unwrap_err();

    assert!(matches!(err, EditorError::GenerateIdentifier(_)));
    assert_eq!(editor.view(), &view_before);
    assert!(updates.drain().is_empty());
}

#[test]
fn attached_image_is_stored_verbatim_and_saved() {
    let mut editor = TagEditor::new(
        &blank_config(),
        InMemoryProductStore::new(),
        RandomIdentifierSource::seeded(13, 5),
    );

    editor
        .attach_image(&FixedImage("blob:local/abc 123"), Path::new("ignored.png"))
        .unwrap();
    let stored = editor.save().unwrap();

    assert_eq!(stored.product.image_ref(), "blob:local/abc 123");
}

#[test]
fn rejected_image_leaves_previous_reference() {
    let mut editor = TagEditor::new(
        &EditorConfig::default(),
        InMemoryProductStore::new(),
        RandomIdentifierSource::seeded(13, 6),
    );
    let before = editor.product().image_ref().to_string();

    let err = editor
        .attach_image(&LocalImageSource::new(), Path::new("spreadsheet.csv"))
        .unwrap_err();

    assert!(matches!(err, EditorError::AttachImage(BoundaryError::Rejected(_))));
    assert_eq!(editor.product().image_ref(), before);
}

#[test]
fn save_new_tag_and_load_round_trip() {
    let mut editor = TagEditor::new(
        &EditorConfig::default(),
        InMemoryProductStore::new(),
        RandomIdentifierSource::seeded(13, 7),
    );
    editor.generate_identifier().unwrap();
    let original_view = editor.view().clone();
    let id = editor.save().unwrap().id;

    editor.new_tag();
    assert!(!editor.view().has_code());

    editor.load(id).unwrap();
    assert_eq!(editor.view(), &original_view);
    assert!(!editor.has_unsaved_changes());
}

#[test]
fn shell_session_prints_previews_and_survives_errors() {
    let editor = TagEditor::new(
        &blank_config(),
        InMemoryProductStore::new(),
        RandomIdentifierSource::seeded(13, 8),
    );
    let mut shell = Shell::new(editor, LocalImageSource::new(), TextTagRenderer::new("$"));

    let script = "\
set name Desk Lamp
set price not-a-number
set colour red
set barcode 12
save
list
quit
set name never applied
";
    let mut output = Vec::new();
    shell.run(Cursor::new(script), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    // Initial blank preview.
    assert!(output.starts_with("Product Name\n$0.00\nNo barcode\n"));
    assert!(output.contains("Desk Lamp\n$0.00\nNo barcode"));
    assert!(output.contains("error: validation failed: unknown field 'colour'"));
    assert!(output.contains("Desk Lamp\n$0.00\n█\n█ ██\n12"));
    assert!(output.contains("saved "));
    assert!(output.contains("Desk Lamp  0.00  12"));
    assert!(!output.contains("never applied"));

    assert_eq!(shell.editor().product().name(), "Desk Lamp");
}
