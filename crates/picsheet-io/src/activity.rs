//! Busy guard for asynchronous session work.
//!
//! Ingestion and export run in spawned tasks. [`ActivityGuard`] marks the
//! session busy when created and marks it idle again when dropped, so
//! the busy flag is cleared on success, on error, and if the task is
//! dropped early.

use dioxus::prelude::*;
use picsheet_catalog::{Activity, PreviewHandle, Session, SessionError};

/// Holds a session's activity until dropped.
pub struct ActivityGuard<P: PreviewHandle + 'static> {
    session: Signal<Session<P>>,
}

impl<P: PreviewHandle + 'static> ActivityGuard<P> {
    /// Start `activity` on the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] if another activity is outstanding.
    pub fn begin(mut session: Signal<Session<P>>, activity: Activity) -> Result<Self, SessionError> {
        session.write().begin(activity)?;
        Ok(Self { session })
    }

    /// Start ingesting a selection of `count` files.
    ///
    /// An empty selection (a cancelled dialog, an empty drop) starts
    /// nothing and leaves the session untouched: `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] if another activity is outstanding.
    pub fn begin_selection(
        session: Signal<Session<P>>,
        count: usize,
    ) -> Result<Option<Self>, SessionError> {
        if count == 0 {
            return Ok(None);
        }
        Self::begin(session, Activity::Ingesting).map(Some)
    }
}

impl<P: PreviewHandle + 'static> Drop for ActivityGuard<P> {
    fn drop(&mut self) {
        // The signal is gone if the app is being torn down.
        if let Ok(mut session) = self.session.try_write() {
            session.finish();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use picsheet_catalog::NoPreview;

    use super::*;

    fn empty_app() -> Element {
        rsx! {}
    }

    /// Run `f` against a fresh idle session owned by a mounted app scope.
    fn with_session(f: impl FnOnce(Signal<Session<NoPreview>>)) {
        let mut dom = VirtualDom::new(empty_app);
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::APP, || f(Signal::new(Session::new())));
    }

    /// An export that fails after the guard is taken.
    fn failing_export(session: Signal<Session<NoPreview>>) -> Result<(), String> {
        let _guard = ActivityGuard::begin(session, Activity::Exporting).map_err(|e| e.to_string())?;
        Err("backend rejected the image".to_owned())
    }

    #[test]
    fn guard_marks_session_busy_until_dropped() {
        with_session(|session| {
            let guard = ActivityGuard::begin(session, Activity::Exporting).unwrap();
            assert_eq!(session.peek().activity(), Activity::Exporting);
            assert!(session.peek().is_busy());

            drop(guard);
            assert_eq!(session.peek().activity(), Activity::Idle);
        });
    }

    #[test]
    fn error_path_restores_idle() {
        with_session(|session| {
            assert!(failing_export(session).is_err());
            assert_eq!(session.peek().activity(), Activity::Idle);
        });
    }

    #[test]
    fn second_guard_is_refused_while_first_is_held() {
        with_session(|session| {
            let first = ActivityGuard::begin(session, Activity::Ingesting).unwrap();
            let second = ActivityGuard::begin(session, Activity::Exporting);
            assert!(matches!(second, Err(SessionError::Busy(Activity::Ingesting))));
            assert_eq!(session.peek().activity(), Activity::Ingesting);

            drop(first);
            assert_eq!(session.peek().activity(), Activity::Idle);
        });
    }

    #[test]
    fn refused_guard_leaves_holder_in_charge() {
        with_session(|session| {
            let first = ActivityGuard::begin(session, Activity::Exporting).unwrap();
            // The refused attempt must not clear the busy flag on its way out.
            drop(ActivityGuard::begin(session, Activity::Ingesting));
            assert_eq!(session.peek().activity(), Activity::Exporting);
            drop(first);
        });
    }

    #[test]
    fn empty_selection_starts_nothing() {
        with_session(|session| {
            let guard = ActivityGuard::begin_selection(session, 0).unwrap();
            assert!(guard.is_none());
            assert_eq!(session.peek().activity(), Activity::Idle);
        });
    }

    #[test]
    fn non_empty_selection_starts_ingesting() {
        with_session(|session| {
            let guard = ActivityGuard::begin_selection(session, 2).unwrap();
            assert!(guard.is_some());
            assert_eq!(session.peek().activity(), Activity::Ingesting);

            drop(guard);
            assert_eq!(session.peek().activity(), Activity::Idle);
        });
    }

    #[test]
    fn selection_is_refused_while_exporting() {
        with_session(|session| {
            let export = ActivityGuard::begin(session, Activity::Exporting).unwrap();
            let result = ActivityGuard::begin_selection(session, 1);
            assert!(matches!(result, Err(SessionError::Busy(Activity::Exporting))));
            drop(export);
        });
    }
}
