//! Shared session access for async tasks
//!
//! A render is eight ordered register writes; two renders interleaving
//! their writes would scramble the columns. `SharedSession` puts the
//! session behind an `embassy-sync` mutex so every operation runs to
//! completion before the next one starts.
//!
//! ```ignore
//! static MATRIX: StaticCell<SharedSession<CriticalSectionRawMutex, Bus>> = StaticCell::new();
//!
//! #[embassy_executor::task]
//! async fn clock_task(matrix: &'static SharedSession<CriticalSectionRawMutex, Bus>) {
//!     matrix.render_text("12:34").await.ok();
//! }
//! ```

use dotchain_core::{ControllerSession, GlyphSource, MatrixError};
use dotchain_hal::SpiBus;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

/// A controller session usable from several tasks
pub struct SharedSession<M: RawMutex, T> {
    inner: Mutex<M, ControllerSession<T>>,
}

impl<M: RawMutex, T: SpiBus> SharedSession<M, T> {
    /// Share an opened session
    pub const fn new(session: ControllerSession<T>) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    /// Render text in the session's font
    pub async fn render_text(&self, text: &str) -> Result<(), MatrixError<T::Error>> {
        self.inner.lock().await.render_text(text)
    }

    /// Render text with an explicit glyph source
    pub async fn render<G>(&self, text: Option<&str>, font: &G) -> Result<(), MatrixError<T::Error>>
    where
        G: GlyphSource + ?Sized,
    {
        self.inner.lock().await.render(text, font)
    }

    /// Set LED intensity (0-15)
    pub async fn set_brightness(&self, level: i16) -> Result<(), MatrixError<T::Error>> {
        self.inner.lock().await.set_brightness(level)
    }

    /// Turn every LED off
    pub async fn clear(&self) -> Result<(), MatrixError<T::Error>> {
        self.inner.lock().await.clear()
    }

    /// Leave or enter shutdown mode
    pub async fn set_power(&self, on: bool) -> Result<(), MatrixError<T::Error>> {
        self.inner.lock().await.set_power(on)
    }

    /// Current brightness
    pub async fn brightness(&self) -> u8 {
        self.inner.lock().await.brightness()
    }

    /// Exclusive access for a sequence of operations
    pub async fn lock(&self) -> MutexGuard<'_, M, ControllerSession<T>> {
        self.inner.lock().await
    }

    /// Stop sharing and take the session back
    pub fn into_inner(self) -> ControllerSession<T> {
        self.inner.into_inner()
    }
}
