//! Facade the windowing collaborator drives. Owns the canonical color and
//! wires sampling, field synchronization, auto-read and the preview together.
//!
//! Everything here is single-threaded and cooperative: the host event loop
//! interleaves timer ticks, user-input callbacks and render passes, and no
//! callback is reentrant. Mutual exclusion between auto-read and manual entry
//! is logical — manual paths are ignored while polling — not a lock.

use crate::autoread::AutoReadController;
use crate::capture::{CaptureBackend, CaptureResult, GrimCaptureBackend, PixelSampler};
use crate::config::{RgbDisplay, Settings};
use crate::contrast::contrast_for;
use crate::error::AppResult;
use crate::fields::{EditOutcome, Field, FieldSync};
use crate::geometry::{Color, ScreenPoint};
use crate::preview::{PreviewGrid, PreviewRenderer};
use crate::state::{ColorState, ReadState};

/// What the collaborator should fill the swatch with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchFill {
    /// No sample yet, or auto-read was just stopped.
    Neutral,
    Color(Color),
}

#[derive(Debug)]
pub struct PickerApp<B: CaptureBackend> {
    sampler: PixelSampler<B>,
    colors: ColorState,
    fields: FieldSync,
    auto_read: AutoReadController,
    preview: PreviewRenderer,
    settings: Settings,
    last_sample_point: Option<ScreenPoint>,
    swatch_neutral: bool,
    preview_generation: u64,
}

impl PickerApp<GrimCaptureBackend> {
    pub fn system(settings: Settings) -> Self {
        Self::with_backend(GrimCaptureBackend, settings)
    }
}

impl<B: CaptureBackend> PickerApp<B> {
    pub fn with_backend(backend: B, settings: Settings) -> Self {
        Self {
            sampler: PixelSampler::with_backend(backend),
            colors: ColorState::new(),
            fields: FieldSync::new(),
            auto_read: AutoReadController::new(),
            preview: PreviewRenderer::new(),
            settings,
            last_sample_point: None,
            swatch_neutral: false,
            preview_generation: 0,
        }
    }

    /// One-shot pick at an explicit screen coordinate. Ignored while polling;
    /// the auto-read controller has exclusive write access then.
    pub fn sample_at(&mut self, point: ScreenPoint) -> CaptureResult<Option<Color>> {
        if self.auto_read.is_polling() {
            return Ok(None);
        }
        let color = self.sampler.sample(point)?;
        self.last_sample_point = Some(point);
        self.commit(color);
        Ok(Some(color))
    }

    /// Dialog selection path. Ignored while polling.
    pub fn choose_color(&mut self, color: Color) {
        if self.auto_read.is_polling() {
            return;
        }
        self.commit(color);
    }

    pub fn edit_hex_full(&mut self, text: &str) {
        if self.auto_read.is_polling() {
            return;
        }
        let outcome = self.fields.apply_hex_full_edit(text);
        self.apply_edit_outcome(outcome);
    }

    pub fn edit_hex_short(&mut self, text: &str) {
        if self.auto_read.is_polling() {
            return;
        }
        let outcome = self.fields.apply_hex_short_edit(text);
        self.apply_edit_outcome(outcome);
    }

    pub fn field_focus_lost(&mut self, field: Field) {
        self.fields.focus_left(field);
        // The field becomes eligible for updates again right away.
        self.push_representations();
    }

    pub fn allow_key(&self, field: Field, key: char) -> bool {
        self.fields.allow_key(field, key)
    }

    /// User toggle for auto-read. Stopping resets the swatch to a neutral
    /// fill, distinct from the last sampled color.
    pub fn toggle_auto_read(&mut self) -> AppResult<ReadState> {
        let state = self.auto_read.toggle()?;
        if state == ReadState::Idle {
            self.swatch_neutral = true;
        }
        Ok(state)
    }

    pub fn is_polling(&self) -> bool {
        self.auto_read.is_polling()
    }

    /// Host timer callback while polling: sample under the pointer and push
    /// the result everywhere. Returns whether a sample landed this tick.
    pub fn tick(&mut self, pointer: ScreenPoint) -> bool {
        if !self
            .auto_read
            .tick(&self.sampler, pointer, &mut self.colors)
        {
            return false;
        }
        self.last_sample_point = Some(pointer);
        self.swatch_neutral = false;
        self.push_representations();
        true
    }

    /// Render-pass hook: re-captures the preview neighborhood when a fresh
    /// sample exists, otherwise leaves the previous grid for redraw.
    pub fn refresh_preview(&mut self) -> bool {
        let Some(anchor) = self.last_sample_point else {
            return false;
        };
        if self.preview_generation == self.colors.generation() {
            return false;
        }
        if self.preview.refresh(&self.sampler, anchor) {
            self.preview_generation = self.colors.generation();
            return true;
        }
        false
    }

    /// Display-mode change from the collaborator's context menu. Ignored
    /// while polling, like the other manual paths.
    pub fn set_rgb_display(&mut self, display: RgbDisplay) {
        if self.auto_read.is_polling() {
            return;
        }
        self.settings.rgb_display = display;
        self.push_representations();
    }

    pub fn set_stay_on_top(&mut self, stay_on_top: bool) {
        self.settings.stay_on_top = stay_on_top;
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn displayed(&self, field: Field) -> &str {
        self.fields.displayed(field)
    }

    pub fn current_color(&self) -> Option<Color> {
        self.colors.current()
    }

    pub fn swatch(&self) -> SwatchFill {
        if self.swatch_neutral {
            return SwatchFill::Neutral;
        }
        match self.colors.current() {
            Some(color) => SwatchFill::Color(color),
            None => SwatchFill::Neutral,
        }
    }

    /// Foreground color for any text drawn over the swatch.
    pub fn contrast(&self) -> Color {
        contrast_for(self.colors.current().unwrap_or(Color::BLACK))
    }

    pub fn preview_grid(&self) -> &PreviewGrid {
        self.preview.grid()
    }

    pub fn preview_has_sample(&self) -> bool {
        self.preview.has_sample()
    }

    fn apply_edit_outcome(&mut self, outcome: EditOutcome) {
        match outcome {
            EditOutcome::Committed(color) => self.commit(color),
            EditOutcome::Ignored => {}
        }
    }

    /// The single mutation path: replace the canonical color, then perform
    /// the explicit push into the unlocked representations.
    fn commit(&mut self, color: Color) {
        self.colors.set_current(color);
        self.swatch_neutral = false;
        self.push_representations();
    }

    fn push_representations(&mut self) {
        if let Some(color) = self.colors.current() {
            self.fields.refresh(color, self.settings.rgb_display);
        }
    }
}
