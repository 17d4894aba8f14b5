use std::rc::Rc;

use crate::classification::ViewportClassification;
use crate::config::{IsMobileOptions, ViewportConfig};
use crate::effects::{disposable_effect, on_unmount};
use crate::error::{Result, ViewportError};
use crate::host::ViewportCapability;
use crate::lifecycle::ViewportClassifier;
use crate::runtime::remember;

/// Composable form of [`ViewportClassifier`]: one classifier per call-site,
/// reconfigured on every pass and torn down when the enclosing scope is
/// disposed.
///
/// Slots are claimed on every pass, failing or not, so an error here never
/// shifts the slots of whatever composes after it.
pub fn use_viewport_classifier(
    host: &Rc<dyn ViewportCapability>,
    mobile_screen_size: f64,
    options: IsMobileOptions,
) -> Result<Rc<ViewportClassifier>> {
    let classifier = remember(|| ViewportClassifier::new(host.clone()));
    disposable_effect((), {
        let classifier = classifier.clone();
        move || on_unmount(move || classifier.teardown())
    });

    if !host.supports_media_queries() {
        return Err(ViewportError::UnsupportedEnvironment);
    }
    let config = ViewportConfig::new(mobile_screen_size, options)?;
    classifier.configure(config)?;

    Ok(classifier)
}

/// Whether the viewport is at most `mobile_screen_size` pixels wide, plus
/// its orientation when `options.enable_orientation` is set.
///
/// ```rust
/// use std::rc::Rc;
/// use viewport_core::testing::FakeViewport;
/// use viewport_core::*;
///
/// let viewport = FakeViewport::new(375.0, 812.0);
/// let host: Rc<dyn ViewportCapability> = Rc::new(viewport.clone());
/// let composition = Composition::new();
///
/// let value = composition
///     .compose(|| use_is_mobile(&host, 768.0, IsMobileOptions::default().with_orientation()))
///     .unwrap();
/// assert_eq!(
///     value,
///     ViewportClassification::WithOrientation {
///         is_mobile: true,
///         orientation: Orientation::Portrait,
///     }
/// );
/// composition.dispose();
/// assert_eq!(viewport.active_listeners(), 0);
/// ```
pub fn use_is_mobile(
    host: &Rc<dyn ViewportCapability>,
    mobile_screen_size: f64,
    options: IsMobileOptions,
) -> Result<ViewportClassification> {
    use_viewport_classifier(host, mobile_screen_size, options).map(|c| c.classification())
}
