pub use crate::classification::ViewportClassification;
pub use crate::config::{IsMobileOptions, ViewportConfig};
pub use crate::effects::{Dispose, disposable_effect, on_unmount};
pub use crate::error::{BindError, ViewportError};
pub use crate::hook::{use_is_mobile, use_viewport_classifier};
pub use crate::host::{Listener, MediaQueryList, ViewportCapability};
pub use crate::lifecycle::{LifecycleState, ViewportClassifier};
pub use crate::orientation::Orientation;
pub use crate::query::{DEFAULT_MOBILE_SCREEN_SIZE, MediaQuery};
pub use crate::runtime::{Composition, remember};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use crate::timer::Timers;
pub use crate::watcher::BindPath;
