//! Newsletter use case implementation.
//!
//! `NewsletterUseCase` is the application controller: it owns the
//! mutable session state, pushes undo snapshots before destructive
//! actions, runs the comment generator and page composer on demand, and
//! requests a best-effort persistence of every mutation. It is the only
//! place user-visible failure messages originate; the core components
//! below it either return a usable result or a well-defined fallback.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::{Mutex, RwLock};

use kawaraban_core::comment::{self, NO_TEMPLATE_MESSAGE};
use kawaraban_core::compose::{self, ComposeOverrides};
use kawaraban_core::error::{KawarabanError, Result};
use kawaraban_core::history::{HistorySnapshot, HistoryStack};
use kawaraban_core::layout::DEFAULT_LAYOUT_ID;
use kawaraban_core::page::PageDescription;
use kawaraban_core::session::{AddPhotosOutcome, FontSizeOverride, Photo, SessionState};
use kawaraban_core::snapshot::{SessionSnapshot, SnapshotRepository};
use kawaraban_core::template::ColorScheme;

const SELECT_MONTH_FIRST: &str = "まず月を選択してください!";
const ADD_PHOTOS_FIRST: &str = "写真を追加してください!";
const NOTHING_TO_UNDO: &str = "元に戻せる操作はありません。";

/// Use case coordinating the session state with the comment generator,
/// the page composer, undo history, and the snapshot repository.
///
/// # Thread Safety
///
/// State and history are wrapped in `Arc` with interior mutability
/// (`RwLock`, `Mutex`) for concurrent access from Tauri commands.
pub struct NewsletterUseCase {
    /// The single mutable editing session.
    state: Arc<RwLock<SessionState>>,
    /// Bounded undo history (5 entries, FIFO eviction).
    history: Arc<Mutex<HistoryStack>>,
    /// Repository for the durable session snapshot.
    snapshot_repository: Arc<dyn SnapshotRepository>,
}

impl NewsletterUseCase {
    /// Creates a new `NewsletterUseCase` with a fresh session.
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
            history: Arc::new(Mutex::new(HistoryStack::new())),
            snapshot_repository,
        }
    }

    /// Applies the persisted snapshot, if one exists and is fresh.
    ///
    /// Returns `true` when a snapshot was applied. Called once at
    /// startup, before the UI reads the session.
    pub async fn restore_persisted(&self) -> Result<bool> {
        match self.snapshot_repository.load().await? {
            Some(snapshot) => {
                let mut state = self.state.write().await;
                snapshot.apply_to(&mut state);
                tracing::info!(saved_at = %snapshot.saved_at, "restored persisted session");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// A copy of the current session state, for the UI.
    pub async fn session(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Selects a month, filling an empty event title with the month's
    /// default event name. Destructive: pushes an undo snapshot.
    pub async fn select_month(&self, month: u32) -> Result<SessionState> {
        let updated = {
            let mut state = self.state.write().await;
            let before = HistorySnapshot::capture(&state);
            state.select_month(month)?;
            self.history.lock().await.push(before);
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(updated)
    }

    /// Selects a layout. Destructive: pushes an undo snapshot.
    pub async fn select_layout(&self, layout_id: &str) -> Result<SessionState> {
        let updated = {
            let mut state = self.state.write().await;
            let before = HistorySnapshot::capture(&state);
            state.select_layout(layout_id)?;
            self.history.lock().await.push(before);
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(updated)
    }

    /// Adds photos up to the remaining capacity. Destructive: pushes an
    /// undo snapshot. The outcome's `dropped` count drives the
    /// user-facing capacity warning.
    pub async fn add_photos(&self, photos: Vec<Photo>) -> Result<AddPhotosOutcome> {
        let (outcome, updated) = {
            let mut state = self.state.write().await;
            self.push_history(&state).await;
            let outcome = state.add_photos(photos);
            (outcome, state.clone())
        };
        if outcome.dropped > 0 {
            tracing::info!(
                added = outcome.added,
                dropped = outcome.dropped,
                "photo capacity reached"
            );
        }
        self.persist_best_effort(&updated).await;
        Ok(outcome)
    }

    /// Removes the photo at `index`. Destructive: pushes an undo
    /// snapshot.
    pub async fn remove_photo(&self, index: usize) -> Result<SessionState> {
        let updated = {
            let mut state = self.state.write().await;
            let before = HistorySnapshot::capture(&state);
            state.remove_photo(index)?;
            self.history.lock().await.push(before);
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(updated)
    }

    pub async fn set_event_title(&self, title: String) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.event_title = title;
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    pub async fn set_event_date(&self, date: Option<NaiveDate>) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.event_date = date;
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    pub async fn set_comment(&self, comment: String) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.comment = comment;
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    /// Overrides one section title for the given layout.
    pub async fn set_section_title(
        &self,
        layout_id: &str,
        section_key: &str,
        title: String,
    ) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.set_section_title(layout_id, section_key, title);
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    /// Sets (or clears) the color override applied uniformly to the
    /// composed page.
    pub async fn set_color_override(&self, colors: Option<ColorScheme>) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.color_override = colors;
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    /// Sets (or clears) the title/comment font size override.
    pub async fn set_font_sizes(&self, sizes: Option<FontSizeOverride>) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.font_size_override = sizes;
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    /// Drops all customization overrides.
    pub async fn clear_customization(&self) -> Result<()> {
        let updated = {
            let mut state = self.state.write().await;
            state.clear_customization();
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(())
    }

    /// Generates a comment from the selected month's template and stores
    /// it as the session comment.
    ///
    /// Without a selected month this returns the "not selected"
    /// placeholder without touching the session (the generator never
    /// fails hard).
    pub async fn generate_comment(&self) -> Result<String> {
        let (generated, updated) = {
            let mut state = self.state.write().await;
            let Some(template) = state.current_template() else {
                return Ok(NO_TEMPLATE_MESSAGE.to_string());
            };
            let generated = comment::generate(template, &state.event_title, state.event_date);
            state.comment = generated.clone();
            (generated, state.clone())
        };
        self.persist_best_effort(&updated).await;
        Ok(generated)
    }

    /// Generates `count` comment candidates without touching the
    /// session; the user picks one in the UI.
    pub async fn generate_comment_batch(&self, count: usize) -> Result<Vec<String>> {
        let state = self.state.read().await;
        let Some(template) = state.current_template() else {
            // One placeholder per requested candidate, so the UI list
            // stays the size the user asked for.
            return Ok(vec![NO_TEMPLATE_MESSAGE.to_string(); count]);
        };
        Ok(comment::generate_batch(
            template,
            &state.event_title,
            state.event_date,
            count,
        ))
    }

    /// Composes the page description for preview/printing.
    ///
    /// Validates the month selection and photo presence first; both are
    /// blocking user-input failures that leave the state unchanged.
    pub async fn compose_preview(&self) -> Result<PageDescription> {
        let state = self.state.read().await;
        let template = state
            .current_template()
            .ok_or_else(|| KawarabanError::validation(SELECT_MONTH_FIRST))?;
        if state.photos.is_empty() {
            return Err(KawarabanError::validation(ADD_PHOTOS_FIRST));
        }

        let layout_id = state
            .selected_layout_id
            .clone()
            .unwrap_or_else(|| DEFAULT_LAYOUT_ID.to_string());
        let overrides = ComposeOverrides {
            section_titles: state.section_titles_for(&layout_id),
            colors: state.color_override.clone(),
            title_font_pt: state.font_size_override.map(|f| f.title_pt),
            comment_font_pt: state.font_size_override.map(|f| f.comment_pt),
        };

        Ok(compose::compose(
            &layout_id,
            template,
            &state.photos,
            &state.event_title,
            state.event_date,
            &state.comment,
            &overrides,
        ))
    }

    /// Restores the most recent undo snapshot.
    ///
    /// Fails closed: with an empty history the state is left unchanged
    /// and a user-facing message is returned as the error.
    pub async fn undo(&self) -> Result<SessionState> {
        let snapshot = {
            let mut history = self.history.lock().await;
            history
                .pop()
                .ok_or_else(|| KawarabanError::validation(NOTHING_TO_UNDO))?
        };
        let updated = {
            let mut state = self.state.write().await;
            snapshot.restore(&mut state);
            state.clone()
        };
        self.persist_best_effort(&updated).await;
        Ok(updated)
    }

    async fn push_history(&self, state: &SessionState) {
        self.history.lock().await.push(HistorySnapshot::capture(state));
    }

    /// Saves a snapshot of `state`. Persistence failures are logged and
    /// swallowed; this path never surfaces an error to the user.
    async fn persist_best_effort(&self, state: &SessionState) {
        let snapshot = SessionSnapshot::from_state(state, Utc::now());
        if let Err(err) = self.snapshot_repository.save(&snapshot).await {
            tracing::warn!(error = %err, "failed to persist session snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// In-memory repository recording every save.
    #[derive(Default)]
    struct MemorySnapshotRepository {
        stored: StdMutex<Option<SessionSnapshot>>,
        save_count: StdMutex<usize>,
        fail_saves: bool,
    }

    #[async_trait]
    impl SnapshotRepository for MemorySnapshotRepository {
        async fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
            *self.save_count.lock().unwrap() += 1;
            if self.fail_saves {
                return Err(KawarabanError::io("disk full"));
            }
            *self.stored.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Option<SessionSnapshot>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn clear(&self) -> Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    fn usecase() -> (NewsletterUseCase, Arc<MemorySnapshotRepository>) {
        let repo = Arc::new(MemorySnapshotRepository::default());
        (NewsletterUseCase::new(repo.clone()), repo)
    }

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo {
                data: format!("data:image/png;base64,{}", i),
                name: format!("p{}.png", i),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_capacity_scenario_march_grid() {
        let (usecase, _) = usecase();
        usecase.select_month(3).await.unwrap();
        usecase.select_layout("grid-5x4").await.unwrap();

        let outcome = usecase.add_photos(photos(25)).await.unwrap();
        assert_eq!(outcome, AddPhotosOutcome { added: 20, dropped: 5 });
        assert_eq!(usecase.session().await.photos.len(), 20);
    }

    #[tokio::test]
    async fn test_undo_restores_in_reverse_order() {
        let (usecase, _) = usecase();
        for month in [1, 2, 3, 4, 5, 6] {
            usecase.select_month(month).await.unwrap();
        }
        // Six pushes; capacity five means the pre-month-2 state is the
        // oldest restorable one.
        assert_eq!(usecase.session().await.selected_month, Some(6));
        for expected in [5, 4, 3, 2, 1].map(Some) {
            let restored = usecase.undo().await.unwrap();
            assert_eq!(restored.selected_month, expected);
        }
        let err = usecase.undo().await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_undo_on_empty_history_leaves_state_unchanged() {
        let (usecase, _) = usecase();
        usecase.set_event_title("七夕まつり".to_string()).await.unwrap();
        let before = usecase.session().await;

        assert!(usecase.undo().await.is_err());
        assert_eq!(usecase.session().await, before);
    }

    #[tokio::test]
    async fn test_failed_mutation_pushes_no_history() {
        let (usecase, _) = usecase();
        assert!(usecase.select_layout("bogus").await.is_err());
        assert!(usecase.select_month(0).await.is_err());
        // Nothing succeeded, so there is nothing to undo.
        assert!(usecase.undo().await.is_err());
    }

    #[tokio::test]
    async fn test_generate_comment_without_month_is_placeholder() {
        let (usecase, _) = usecase();
        let comment = usecase.generate_comment().await.unwrap();
        assert_eq!(comment, NO_TEMPLATE_MESSAGE);
        // The placeholder is not stored as the session comment.
        assert!(usecase.session().await.comment.is_empty());
    }

    #[tokio::test]
    async fn test_generate_comment_stores_result() {
        let (usecase, _) = usecase();
        usecase.select_month(7).await.unwrap();
        let comment = usecase.generate_comment().await.unwrap();
        assert!(!comment.is_empty());
        assert_eq!(usecase.session().await.comment, comment);
    }

    #[tokio::test]
    async fn test_generate_batch_without_month_repeats_placeholder() {
        let (usecase, _) = usecase();
        let batch = usecase.generate_comment_batch(3).await.unwrap();
        assert_eq!(batch, vec![NO_TEMPLATE_MESSAGE.to_string(); 3]);
    }

    #[tokio::test]
    async fn test_generate_batch_is_independent() {
        let (usecase, _) = usecase();
        usecase.select_month(7).await.unwrap();
        let batch = usecase.generate_comment_batch(3).await.unwrap();
        assert_eq!(batch.len(), 3);
        assert!(usecase.session().await.comment.is_empty());
    }

    #[tokio::test]
    async fn test_compose_preview_validations() {
        let (usecase, _) = usecase();
        let err = usecase.compose_preview().await.unwrap_err();
        assert_eq!(err.to_string(), SELECT_MONTH_FIRST);

        usecase.select_month(3).await.unwrap();
        let err = usecase.compose_preview().await.unwrap_err();
        assert_eq!(err.to_string(), ADD_PHOTOS_FIRST);

        usecase.add_photos(photos(4)).await.unwrap();
        let page = usecase.compose_preview().await.unwrap();
        assert_eq!(page.layout_id, DEFAULT_LAYOUT_ID);
        assert_eq!(page.photo_indices().len(), 4);
    }

    #[tokio::test]
    async fn test_compose_preview_uses_overrides() {
        let (usecase, _) = usecase();
        usecase.select_month(10).await.unwrap();
        usecase.select_layout("magazine-3col").await.unwrap();
        usecase.add_photos(photos(12)).await.unwrap();
        usecase
            .set_section_title("magazine-3col", "section1", "玉入れ".to_string())
            .await
            .unwrap();
        usecase
            .set_font_sizes(Some(FontSizeOverride {
                title_pt: 30,
                comment_pt: 13,
            }))
            .await
            .unwrap();

        let page = usecase.compose_preview().await.unwrap();
        assert_eq!(page.header.title_font_pt, 30);
        match &page.regions[0] {
            kawaraban_core::page::PageRegion::PhotoGrid { label, .. } => {
                assert_eq!(label.as_deref(), Some("玉入れ"));
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutations_persist_snapshots() {
        let (usecase, repo) = usecase();
        usecase.select_month(11).await.unwrap();
        usecase.set_comment("🍁 紅葉 🍁".to_string()).await.unwrap();

        assert!(*repo.save_count.lock().unwrap() >= 2);
        let stored = repo.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored.selected_month, Some(11));
        assert_eq!(stored.comment, "🍁 紅葉 🍁");
    }

    #[tokio::test]
    async fn test_customization_mutations_persist_snapshots() {
        let (usecase, repo) = usecase();
        usecase.select_month(3).await.unwrap();
        usecase
            .set_section_title("grid-5x4", "photos", "思い出".to_string())
            .await
            .unwrap();

        let before = *repo.save_count.lock().unwrap();
        usecase
            .set_font_sizes(Some(FontSizeOverride {
                title_pt: 28,
                comment_pt: 12,
            }))
            .await
            .unwrap();
        usecase.set_color_override(None).await.unwrap();
        usecase.clear_customization().await.unwrap();
        assert_eq!(*repo.save_count.lock().unwrap(), before + 3);

        // Clearing customization drops section titles from the stored
        // snapshot too, not just from the in-memory session.
        let stored = repo.stored.lock().unwrap().clone().unwrap();
        assert!(stored.section_titles.is_empty());
    }

    #[tokio::test]
    async fn test_persistence_failure_is_swallowed() {
        let repo = Arc::new(MemorySnapshotRepository {
            fail_saves: true,
            ..Default::default()
        });
        let usecase = NewsletterUseCase::new(repo.clone());
        // The mutation itself succeeds even though every save fails.
        usecase.select_month(1).await.unwrap();
        assert_eq!(usecase.session().await.selected_month, Some(1));
        assert!(*repo.save_count.lock().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_restore_persisted_applies_snapshot() {
        let (first, repo) = usecase();
        first.select_month(12).await.unwrap();
        first.set_comment("🎄".to_string()).await.unwrap();

        let second = NewsletterUseCase::new(repo);
        assert!(second.restore_persisted().await.unwrap());
        let state = second.session().await;
        assert_eq!(state.selected_month, Some(12));
        assert_eq!(state.comment, "🎄");
        assert!(state.photos.is_empty());
    }

    #[tokio::test]
    async fn test_restore_persisted_without_snapshot() {
        let (usecase, _) = usecase();
        assert!(!usecase.restore_persisted().await.unwrap());
        assert_eq!(usecase.session().await, SessionState::new());
    }
}
