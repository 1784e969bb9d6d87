// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-object custom behavior run at the end of every tick.

use core::fmt;

/// A caller-supplied callback bound to one object.
///
/// The space runs it once per tick, after all physics, with mutable access to
/// the object that owns it. What it does is up to the caller.
pub struct Script<T>(Box<dyn FnMut(&mut T)>);

impl<T> Script<T> {
    /// Wraps a closure.
    pub fn new(f: impl FnMut(&mut T) + 'static) -> Self {
        Self(Box::new(f))
    }

    pub(crate) fn call(&mut self, target: &mut T) {
        (self.0)(target);
    }
}

impl<T> fmt::Debug for Script<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Script(..)")
    }
}

/// An object's script plus a count of writes to it.
///
/// The count lets [`run_slot`] tell a script that replaced or removed itself
/// apart from one that left its slot alone.
pub(crate) struct ScriptSlot<T> {
    script: Option<Script<T>>,
    writes: u64,
}

impl<T> ScriptSlot<T> {
    pub(crate) const fn empty() -> Self {
        Self {
            script: None,
            writes: 0,
        }
    }

    pub(crate) fn set(&mut self, script: Option<Script<T>>) {
        self.script = script;
        self.writes = self.writes.wrapping_add(1);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.script.is_some()
    }
}

impl<T> fmt::Debug for ScriptSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptSlot")
            .field("script", &self.script)
            .finish_non_exhaustive()
    }
}

/// Takes the script out of `slot`, runs it on `target`, and puts it back
/// unless the script wrote to its own slot while running.
pub(crate) fn run_slot<T>(target: &mut T, slot: fn(&mut T) -> &mut ScriptSlot<T>) {
    let current = slot(target);
    let writes = current.writes;
    let Some(mut script) = current.script.take() else {
        return;
    };
    script.call(target);
    let current = slot(target);
    if current.writes == writes {
        current.script = Some(script);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        calls: u32,
        slot: ScriptSlot<Counter>,
    }

    fn counter(f: impl FnMut(&mut Counter) + 'static) -> Counter {
        let mut c = Counter {
            calls: 0,
            slot: ScriptSlot::empty(),
        };
        c.slot.set(Some(Script::new(f)));
        c
    }

    #[test]
    fn untouched_slot_is_restored() {
        let mut c = counter(|c| c.calls += 1);
        run_slot(&mut c, |c| &mut c.slot);
        run_slot(&mut c, |c| &mut c.slot);
        assert_eq!(c.calls, 2);
        assert!(c.slot.is_set());
    }

    #[test]
    fn replacement_installed_while_running_wins() {
        let mut c = counter(|c| {
            c.calls += 1;
            c.slot.set(Some(Script::new(|c: &mut Counter| c.calls += 10)));
        });
        run_slot(&mut c, |c| &mut c.slot);
        run_slot(&mut c, |c| &mut c.slot);
        assert_eq!(c.calls, 11);
    }
}
