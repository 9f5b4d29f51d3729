use std::{
    cell::Cell,
    ops::{Deref, DerefMut},
};

use deno_core::{JsRuntime, RuntimeOptions};

/// IsolateCell tracks which isolates are currently entered on this thread.
///
/// V8 keeps a per thread stack of entered isolates, so a sandbox isolate created from inside
/// a host op is entered on top of the host isolate and has to be exited before the host
/// continues. The cell records the nesting depth so guards can check they are released in
/// reverse order of entry, removing the need for manual unsafe enter/exit management.
#[derive(Default)]
pub struct IsolateCell {
    depth: Cell<usize>,
}

impl IsolateCell {
    pub fn enter_isolate<'a, 'b>(&'a self, rt: &'b mut ManagedIsolate) -> IsolateGuard<'a, 'b> {
        let level = self.depth.get() + 1;
        self.depth.set(level);

        // SAFETY: managed isolates are exited after creation, and the guard exits this
        // isolate again before any isolate entered below it is touched
        unsafe {
            rt.inner.v8_isolate().enter();
        }

        IsolateGuard {
            cell: self,
            rt,
            level,
        }
    }

    /// Number of isolates currently entered through this cell.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

pub struct IsolateGuard<'a, 'b> {
    cell: &'a IsolateCell,
    rt: &'b mut ManagedIsolate,
    level: usize,
}

impl IsolateGuard<'_, '_> {
    /// Nesting level this guard entered at, 1 for the outermost isolate.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl<'a, 'b> Drop for IsolateGuard<'a, 'b> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.cell.depth.get(),
            self.level,
            "isolates must be exited in reverse order of entry"
        );

        // SAFETY: there's no way to construct a guard without entering the isolate
        unsafe { self.rt.inner.v8_isolate().exit() };

        self.cell.depth.set(self.level - 1);
    }
}

impl Deref for IsolateGuard<'_, '_> {
    type Target = JsRuntime;

    fn deref(&self) -> &Self::Target {
        &self.rt.inner
    }
}

impl DerefMut for IsolateGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rt.inner
    }
}

/// ManagedIsolate is a isolate where the enter and exit state is managed by the IsolateCell
/// this removed the need for manual unsafe management of the enter and exit states
pub struct ManagedIsolate {
    inner: JsRuntime,
}

impl ManagedIsolate {
    pub fn new(opts: RuntimeOptions) -> Self {
        let mut rt = JsRuntime::new(opts);
        rt.sync_ops_cache();

        // SAFETY: new enters the isolate
        unsafe { rt.v8_isolate().exit() }

        Self { inner: rt }
    }
}

impl Drop for ManagedIsolate {
    fn drop(&mut self) {
        // SAFETY: the runtime exits the isolate again when it's disposed right after this,
        // so the thread's isolate stack is left as it was before the drop
        unsafe { self.inner.v8_isolate().enter() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_tracks_nested_guards() {
        let cell = IsolateCell::default();
        let mut outer = ManagedIsolate::new(RuntimeOptions::default());
        let mut inner = ManagedIsolate::new(RuntimeOptions::default());

        assert_eq!(cell.depth(), 0);
        {
            let outer_guard = cell.enter_isolate(&mut outer);
            assert_eq!(outer_guard.level(), 1);
            {
                let inner_guard = cell.enter_isolate(&mut inner);
                assert_eq!(inner_guard.level(), 2);
                assert_eq!(cell.depth(), 2);
            }
            assert_eq!(cell.depth(), 1);
        }
        assert_eq!(cell.depth(), 0);
    }

    #[test]
    fn isolate_created_and_dropped_inside_entered_isolate() {
        let cell = IsolateCell::default();
        let mut outer = ManagedIsolate::new(RuntimeOptions::default());

        let mut guard = cell.enter_isolate(&mut outer);
        {
            let mut nested = ManagedIsolate::new(RuntimeOptions::default());
            let mut nested_guard = cell.enter_isolate(&mut nested);
            nested_guard
                .execute_script("nested.js", "globalThis.x = 1;")
                .unwrap();
        }

        // the outer isolate is usable again once the nested one is gone
        guard.execute_script("outer.js", "1 + 1").unwrap();
        drop(guard);
        assert_eq!(cell.depth(), 0);
    }
}
