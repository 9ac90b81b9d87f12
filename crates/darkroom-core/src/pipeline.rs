//! The editing session: a pristine original and the working image derived from it.
//!
//! Tone adjustments always start over from the original, while filters stack
//! on top of whatever the working image currently shows. Setting new tone
//! parameters therefore discards every filter applied since the last tone
//! pass.

use std::path::Path;

use crate::adjustments::apply_tone;
use crate::buffer::PixelBuffer;
use crate::error::EditorError;
use crate::filters::{Filter, FilterKind};
use crate::histogram::compute_histogram;
use crate::{decode, encode, Histogram, ToneParams};

/// Buffers and settings of the loaded image.
#[derive(Debug, Clone)]
struct Session {
    original: PixelBuffer,
    current: PixelBuffer,
    params: ToneParams,
    applied_filters: Vec<FilterKind>,
}

impl Session {
    fn new(original: PixelBuffer) -> Self {
        Self {
            current: original.clone(),
            original,
            params: ToneParams::default(),
            applied_filters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Empty,
    Loaded(Session),
}

/// Owns the editor's buffers and is the only thing that mutates them.
///
/// Starts out empty. Every operation that needs an image fails with
/// [`EditorError::NoImageLoaded`] until one is loaded, without changing
/// state.
#[derive(Debug, Clone, Default)]
pub struct PipelineController {
    state: State,
}

impl PipelineController {
    /// Create an empty controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with `image` as the original.
    ///
    /// Replaces any loaded image, resets the tone parameters to zero and
    /// clears the filter log.
    pub fn load(&mut self, image: PixelBuffer) {
        tracing::info!(
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.state = State::Loaded(Session::new(image));
    }

    /// Decode `bytes` and load the result.
    ///
    /// On a decode failure the previous session is kept as it was.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        let image = decode::decode_image(bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "decode failed; keeping current image");
        })?;
        self.load(image);
        Ok(())
    }

    /// Read and decode the file at `path`, then load it.
    ///
    /// On failure the previous session is kept as it was.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        let image = decode::load_image(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "load failed; keeping current image");
        })?;
        self.load(image);
        Ok(())
    }

    /// Drop the loaded image and return to the empty state.
    pub fn clear(&mut self) {
        if self.is_loaded() {
            tracing::info!("image unloaded");
        }
        self.state = State::Empty;
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    /// Recompute the working image from the original with new tone parameters.
    ///
    /// Values are clamped into -100..=100. Filters applied since the last
    /// tone pass are discarded.
    pub fn set_parameters(
        &mut self,
        brightness: i32,
        contrast: i32,
        saturation: i32,
    ) -> Result<(), EditorError> {
        self.set_tone(ToneParams::new(brightness, contrast, saturation))
    }

    /// [`set_parameters`](Self::set_parameters) taking a [`ToneParams`].
    pub fn set_tone(&mut self, params: ToneParams) -> Result<(), EditorError> {
        let session = self.session_mut("set_parameters")?;
        let params = params.clamped();

        session.current = apply_tone(&session.original, &params);
        session.params = params;
        session.applied_filters.clear();
        Ok(())
    }

    /// Apply a filter on top of the working image.
    pub fn apply_filter(&mut self, kind: FilterKind) -> Result<(), EditorError> {
        let session = self.session_mut("apply_filter")?;

        tracing::debug!(filter = %kind, "filter pass");
        kind.filter().apply_in_place(&mut session.current);
        session.applied_filters.push(kind);
        Ok(())
    }

    /// Restore the working image to the original and zero the parameters.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        let session = self.session_mut("reset")?;

        session.current = session.original.clone();
        session.params = ToneParams::default();
        session.applied_filters.clear();
        Ok(())
    }

    /// The working image, as it should be displayed or saved.
    pub fn current(&self) -> Result<&PixelBuffer, EditorError> {
        self.session().map(|s| &s.current)
    }

    /// The image as it was loaded.
    pub fn original(&self) -> Result<&PixelBuffer, EditorError> {
        self.session().map(|s| &s.original)
    }

    /// Tone parameters of the last tone pass.
    pub fn parameters(&self) -> Result<ToneParams, EditorError> {
        self.session().map(|s| s.params)
    }

    /// Filters applied since the working image was last rebuilt from the original.
    pub fn applied_filters(&self) -> Result<&[FilterKind], EditorError> {
        self.session().map(|s| s.applied_filters.as_slice())
    }

    /// Histogram of the working image.
    pub fn histogram(&self) -> Result<Histogram, EditorError> {
        self.current().map(compute_histogram)
    }

    /// Encode the working image as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, EditorError> {
        Ok(encode::encode_png(self.current()?)?)
    }

    /// Save the working image as PNG at exactly `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        Ok(encode::save_png(self.current()?, path)?)
    }

    fn session(&self) -> Result<&Session, EditorError> {
        match &self.state {
            State::Loaded(session) => Ok(session),
            State::Empty => Err(EditorError::NoImageLoaded),
        }
    }

    fn session_mut(&mut self, operation: &'static str) -> Result<&mut Session, EditorError> {
        match &mut self.state {
            State::Loaded(session) => Ok(session),
            State::Empty => {
                tracing::warn!(operation, "rejected: no image loaded");
                Err(EditorError::NoImageLoaded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height * 3).map(|i| (i * 13 % 256) as u8).collect();
        PixelBuffer::from_raw(width, height, pixels).unwrap()
    }

    fn loaded(image: PixelBuffer) -> PipelineController {
        let mut editor = PipelineController::new();
        editor.load(image);
        editor
    }

    #[test]
    fn test_new_is_empty() {
        let editor = PipelineController::new();
        assert!(!editor.is_loaded());
        assert!(matches!(editor.current(), Err(EditorError::NoImageLoaded)));
        assert!(matches!(editor.original(), Err(EditorError::NoImageLoaded)));
    }

    #[test]
    fn test_empty_operations_fail_without_panicking() {
        let mut editor = PipelineController::new();

        assert!(matches!(
            editor.set_parameters(10, 10, 10),
            Err(EditorError::NoImageLoaded)
        ));
        assert!(matches!(
            editor.apply_filter(FilterKind::Blur),
            Err(EditorError::NoImageLoaded)
        ));
        assert!(matches!(editor.reset(), Err(EditorError::NoImageLoaded)));
        assert!(matches!(editor.histogram(), Err(EditorError::NoImageLoaded)));
        assert!(matches!(editor.encode_png(), Err(EditorError::NoImageLoaded)));
        assert!(!editor.is_loaded());
    }

    #[test]
    fn test_load_copies_original() {
        let image = gradient(4, 3);
        let editor = loaded(image.clone());

        assert!(editor.is_loaded());
        assert_eq!(editor.original().unwrap(), &image);
        assert_eq!(editor.current().unwrap(), &image);
        assert!(editor.parameters().unwrap().is_default());
        assert!(editor.applied_filters().unwrap().is_empty());
    }

    #[test]
    fn test_set_parameters_matches_tone_pass() {
        let image = gradient(5, 5);
        let mut editor = loaded(image.clone());

        editor.set_parameters(30, -20, 50).unwrap();

        let expected = apply_tone(&image, &ToneParams::new(30, -20, 50));
        assert_eq!(editor.current().unwrap(), &expected);
        assert_eq!(editor.original().unwrap(), &image);
        assert_eq!(editor.parameters().unwrap(), ToneParams::new(30, -20, 50));
    }

    #[test]
    fn test_set_parameters_clamps() {
        let image = gradient(3, 3);
        let mut editor = loaded(image.clone());

        editor.set_parameters(250, -300, 101).unwrap();

        assert_eq!(editor.parameters().unwrap(), ToneParams::new(100, -100, 100));
        let expected = apply_tone(&image, &ToneParams::new(100, -100, 100));
        assert_eq!(editor.current().unwrap(), &expected);
    }

    #[test]
    fn test_set_parameters_discards_filters() {
        let image = gradient(4, 4);
        let mut editor = loaded(image.clone());

        editor.apply_filter(FilterKind::Invert).unwrap();
        editor.set_parameters(10, 0, 0).unwrap();

        let expected = apply_tone(&image, &ToneParams::new(10, 0, 0));
        assert_eq!(editor.current().unwrap(), &expected);
        assert!(editor.applied_filters().unwrap().is_empty());
    }

    #[test]
    fn test_zero_parameters_after_filter_restore_original() {
        let image = gradient(4, 4);
        let mut editor = loaded(image.clone());

        editor.apply_filter(FilterKind::Sepia).unwrap();
        editor.set_parameters(0, 0, 0).unwrap();

        assert_eq!(editor.current().unwrap(), &image);
    }

    #[test]
    fn test_filters_chain() {
        let image = gradient(6, 5);
        let mut editor = loaded(image.clone());

        editor.apply_filter(FilterKind::Blur).unwrap();
        editor.apply_filter(FilterKind::Grayscale).unwrap();

        let blurred = FilterKind::Blur.filter().apply(&image);
        let expected = FilterKind::Grayscale.filter().apply(&blurred);
        assert_eq!(editor.current().unwrap(), &expected);
        assert_eq!(
            editor.applied_filters().unwrap(),
            &[FilterKind::Blur, FilterKind::Grayscale]
        );
    }

    #[test]
    fn test_invert_twice_restores_current() {
        let image = gradient(4, 4);
        let mut editor = loaded(image.clone());

        editor.apply_filter(FilterKind::Invert).unwrap();
        editor.apply_filter(FilterKind::Invert).unwrap();

        assert_eq!(editor.current().unwrap(), &image);
    }

    #[test]
    fn test_tone_then_filter_keeps_both() {
        let image = gradient(5, 4);
        let mut editor = loaded(image.clone());

        editor.set_parameters(-40, 25, 0).unwrap();
        editor.apply_filter(FilterKind::Sharpen).unwrap();

        let toned = apply_tone(&image, &ToneParams::new(-40, 25, 0));
        let expected = FilterKind::Sharpen.filter().apply(&toned);
        assert_eq!(editor.current().unwrap(), &expected);
        assert_eq!(editor.parameters().unwrap(), ToneParams::new(-40, 25, 0));
    }

    #[test]
    fn test_reset() {
        let image = gradient(4, 4);
        let mut editor = loaded(image.clone());

        editor.set_parameters(50, 50, 50).unwrap();
        editor.apply_filter(FilterKind::EdgeDetection).unwrap();
        editor.reset().unwrap();

        assert_eq!(editor.current().unwrap(), &image);
        assert!(editor.parameters().unwrap().is_default());
        assert!(editor.applied_filters().unwrap().is_empty());
    }

    #[test]
    fn test_load_replaces_session() {
        let mut editor = loaded(gradient(4, 4));
        editor.set_parameters(20, 20, 20).unwrap();
        editor.apply_filter(FilterKind::Blur).unwrap();

        let next = PixelBuffer::filled(2, 2, [9, 8, 7]).unwrap();
        editor.load(next.clone());

        assert_eq!(editor.original().unwrap(), &next);
        assert_eq!(editor.current().unwrap(), &next);
        assert!(editor.parameters().unwrap().is_default());
        assert!(editor.applied_filters().unwrap().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let image = gradient(3, 3);
        let mut editor = loaded(image.clone());
        editor.apply_filter(FilterKind::Invert).unwrap();
        let before = editor.current().unwrap().clone();

        let result = editor.load_bytes(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(EditorError::Decode(_))));
        assert_eq!(editor.current().unwrap(), &before);
        assert_eq!(editor.original().unwrap(), &image);

        let result = editor.load_file("/nonexistent/darkroom/photo.jpg");
        assert!(matches!(result, Err(EditorError::Decode(_))));
        assert_eq!(editor.current().unwrap(), &before);
    }

    #[test]
    fn test_load_file_with_bad_contents_keeps_state() {
        let path = std::env::temp_dir().join(format!("darkroom-{}-garbage.png", std::process::id()));
        std::fs::write(&path, b"definitely not a png").unwrap();

        let image = gradient(2, 2);
        let mut editor = loaded(image.clone());
        let result = editor.load_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(EditorError::Decode(_))));
        assert_eq!(editor.original().unwrap(), &image);
        assert_eq!(editor.current().unwrap(), &image);
    }

    #[test]
    fn test_failed_load_on_empty_stays_empty() {
        let mut editor = PipelineController::new();
        assert!(editor.load_bytes(b"not an image").is_err());
        assert!(!editor.is_loaded());
    }

    #[test]
    fn test_load_bytes_from_png() {
        let image = gradient(3, 2);
        let png = encode::encode_png(&image).unwrap();

        let mut editor = PipelineController::new();
        editor.load_bytes(&png).unwrap();
        assert_eq!(editor.original().unwrap(), &image);
    }

    #[test]
    fn test_encode_png_of_current() {
        let mut editor = loaded(gradient(3, 3));
        editor.apply_filter(FilterKind::Invert).unwrap();

        let png = editor.encode_png().unwrap();
        let decoded = decode::decode_image(&png).unwrap();
        assert_eq!(&decoded, editor.current().unwrap());
    }

    #[test]
    fn test_histogram_follows_current() {
        let mut editor = loaded(PixelBuffer::filled(2, 2, [0, 0, 0]).unwrap());
        assert_eq!(editor.histogram().unwrap().red[0], 4);

        editor.apply_filter(FilterKind::Invert).unwrap();
        let hist = editor.histogram().unwrap();
        assert_eq!(hist.red[255], 4);
        assert_eq!(hist.luminance[255], 4);
    }

    #[test]
    fn test_clear() {
        let mut editor = loaded(gradient(2, 2));
        editor.clear();

        assert!(!editor.is_loaded());
        assert!(matches!(
            editor.apply_filter(FilterKind::Sepia),
            Err(EditorError::NoImageLoaded)
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn filter_kind() -> impl Strategy<Value = FilterKind> {
        prop::sample::select(FilterKind::iter().collect::<Vec<_>>())
    }

    proptest! {
        /// Property: a tone pass ignores whatever filters came before it.
        #[test]
        fn prop_tone_rebases_on_original(
            filters in prop::collection::vec(filter_kind(), 0..4),
            b in -100i32..=100,
            c in -100i32..=100,
            s in -100i32..=100,
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..4 * 4 * 3u32)
                .map(|i| (i as u8).wrapping_mul(29).wrapping_add(seed))
                .collect();
            let image = PixelBuffer::from_raw(4, 4, pixels).unwrap();

            let mut editor = PipelineController::new();
            editor.load(image.clone());
            for kind in filters {
                editor.apply_filter(kind).unwrap();
            }
            editor.set_parameters(b, c, s).unwrap();

            let expected = apply_tone(&image, &ToneParams::new(b, c, s));
            prop_assert_eq!(editor.current().unwrap(), &expected);
            prop_assert_eq!(editor.original().unwrap(), &image);
        }

        /// Property: filters never change dimensions or the original.
        #[test]
        fn prop_filters_keep_original(
            filters in prop::collection::vec(filter_kind(), 1..6),
            (width, height) in (1u32..=6, 1u32..=6),
        ) {
            let image = PixelBuffer::filled(width, height, [120, 60, 200]).unwrap();
            let mut editor = PipelineController::new();
            editor.load(image.clone());

            for kind in &filters {
                editor.apply_filter(*kind).unwrap();
            }

            let current = editor.current().unwrap();
            prop_assert_eq!((current.width(), current.height()), (width, height));
            prop_assert_eq!(editor.original().unwrap(), &image);
            prop_assert_eq!(editor.applied_filters().unwrap(), filters.as_slice());
        }
    }
}
