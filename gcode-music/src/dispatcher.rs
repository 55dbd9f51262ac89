use crate::config::MacroConfig;
use crate::error::MacroError;
use crate::executor::{DiagnosticSink, Executor};
use crate::pool::SlotPool;
use crate::trigger::Trigger;
use crate::{CUSTOM_SLOT_NUM, CUSTOM_SLOT_SIZE, PRESET_SLOT_NUM, PRESET_SLOT_SIZE};

/// Message reported when a definition doesn't fit its slot
pub const SEQUENCE_TOO_LONG: &str = "Sequence too long.";

/// Which pool a trigger targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PoolSelector {
    Preset,
    Custom,
}

/// What a handled trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOutcome {
    /// The slot now holds `len` bytes
    Defined { len: usize },
    /// The slot content was submitted to the executor
    Played,
    /// Play was requested on an empty slot, nothing was submitted
    EmptySlot,
    /// The trigger addressed no slot, nothing happened
    Ignored,
}

/// Owns the macro pools and decides, per trigger, whether to define or play a slot.
///
/// Must only ever be driven from a single command processing context.
pub struct MacroDispatcher<
    const PRESET_NUM: usize = { PRESET_SLOT_NUM },
    const PRESET_SIZE: usize = { PRESET_SLOT_SIZE },
    const CUSTOM_NUM: usize = { CUSTOM_SLOT_NUM },
    const CUSTOM_SIZE: usize = { CUSTOM_SLOT_SIZE },
> {
    preset: Option<SlotPool<PRESET_NUM, PRESET_SIZE>>,
    custom: Option<SlotPool<CUSTOM_NUM, CUSTOM_SIZE>>,
}

impl<const PRESET_NUM: usize, const PRESET_SIZE: usize, const CUSTOM_NUM: usize, const CUSTOM_SIZE: usize> Default
    for MacroDispatcher<PRESET_NUM, PRESET_SIZE, CUSTOM_NUM, CUSTOM_SIZE>
{
    fn default() -> Self {
        Self::new(&MacroConfig::default())
    }
}

impl<const PRESET_NUM: usize, const PRESET_SIZE: usize, const CUSTOM_NUM: usize, const CUSTOM_SIZE: usize>
    MacroDispatcher<PRESET_NUM, PRESET_SIZE, CUSTOM_NUM, CUSTOM_SIZE>
{
    pub fn new(config: &MacroConfig) -> Self {
        Self {
            preset: config.preset.as_ref().map(SlotPool::new),
            custom: config.custom.as_ref().map(SlotPool::new),
        }
    }

    pub fn preset_pool(&self) -> Option<&SlotPool<PRESET_NUM, PRESET_SIZE>> {
        self.preset.as_ref()
    }

    pub fn custom_pool(&self) -> Option<&SlotPool<CUSTOM_NUM, CUSTOM_SIZE>> {
        self.custom.as_ref()
    }

    /// Route an M-code to a pool. The preset range wins if both claim the code.
    ///
    /// Returns `None` if the code is not a macro code at all.
    pub fn select(&self, code: u16) -> Option<(PoolSelector, i32)> {
        if self.preset.as_ref().is_some_and(|pool| pool.claims(code)) {
            Some((PoolSelector::Preset, code as i32))
        } else if self.custom.as_ref().is_some_and(|pool| pool.claims(code)) {
            Some((PoolSelector::Custom, code as i32))
        } else {
            None
        }
    }

    /// Stored content of a slot, `None` if the slot doesn't exist
    pub fn slot_content(&self, pool: PoolSelector, position: usize) -> Option<&str> {
        match pool {
            PoolSelector::Preset => self.preset.as_ref()?.get(position).map(|slot| slot.content()),
            PoolSelector::Custom => self.custom.as_ref()?.get(position).map(|slot| slot.content()),
        }
    }

    /// Define or play a slot.
    ///
    /// A non-empty `argument` replaces the slot content, an empty one submits the stored
    /// content to `executor`. Unknown slots are ignored without any diagnostic, a definition
    /// which doesn't fit is reported to `diagnostics` and leaves the slot untouched.
    pub fn handle<E: Executor, D: DiagnosticSink>(
        &mut self,
        pool: PoolSelector,
        trigger_index: i32,
        argument: &str,
        executor: &mut E,
        diagnostics: &mut D,
    ) -> Result<MacroOutcome, MacroError> {
        match pool {
            PoolSelector::Preset => match self.preset.as_mut() {
                Some(pool) => handle_in_pool(pool, trigger_index, argument, executor, diagnostics),
                None => Ok(MacroOutcome::Ignored),
            },
            PoolSelector::Custom => match self.custom.as_mut() {
                Some(pool) => handle_in_pool(pool, trigger_index, argument, executor, diagnostics),
                None => Ok(MacroOutcome::Ignored),
            },
        }
    }

    /// Handle a parsed command line, `None` if it's not a macro code
    pub fn handle_trigger<E: Executor, D: DiagnosticSink>(
        &mut self,
        trigger: &Trigger<'_>,
        executor: &mut E,
        diagnostics: &mut D,
    ) -> Option<Result<MacroOutcome, MacroError>> {
        let (pool, trigger_index) = self.select(trigger.code)?;
        Some(self.handle(pool, trigger_index, trigger.argument, executor, diagnostics))
    }
}

fn handle_in_pool<const N: usize, const L: usize, E: Executor, D: DiagnosticSink>(
    pool: &mut SlotPool<N, L>,
    trigger_index: i32,
    argument: &str,
    executor: &mut E,
    diagnostics: &mut D,
) -> Result<MacroOutcome, MacroError> {
    let Some(position) = pool.position_of(trigger_index) else {
        return Ok(MacroOutcome::Ignored);
    };
    let Some(slot) = pool.get_mut(position) else {
        return Ok(MacroOutcome::Ignored);
    };

    if !argument.is_empty() {
        // Define
        match slot.define(argument) {
            Ok(len) => {
                debug!("Macro M{} defined, {} bytes", trigger_index, len);
                Ok(MacroOutcome::Defined { len })
            }
            Err(e) => {
                diagnostics.report(SEQUENCE_TOO_LONG);
                Err(e)
            }
        }
    } else if slot.is_empty() {
        debug!("Macro M{} is empty", trigger_index);
        Ok(MacroOutcome::EmptySlot)
    } else {
        // Play
        match executor.submit(slot.content()) {
            Ok(()) => {
                info!("Playing macro M{}", trigger_index);
                Ok(MacroOutcome::Played)
            }
            Err(e) => {
                warn!("Macro M{} not played: {:?}", trigger_index, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::string::String;
    use std::vec::Vec;

    use super::*;
    use crate::config::PoolConfig;
    use crate::default_content::PRESET_MACROS;

    #[derive(Default)]
    struct Recorder {
        submitted: Vec<String>,
        reports: Vec<String>,
    }

    impl Executor for Recorder {
        fn submit(&mut self, commands: &str) -> Result<(), crate::ExecutorError> {
            self.submitted.push(commands.into());
            Ok(())
        }
    }

    impl DiagnosticSink for Recorder {
        fn report(&mut self, message: &str) {
            self.reports.push(message.into());
        }
    }

    type SmallDispatcher = MacroDispatcher<5, 651, 3, 16>;

    fn dispatcher() -> SmallDispatcher {
        MacroDispatcher::new(&MacroConfig {
            preset: Some(PoolConfig::new(9000, 5).with_defaults(PRESET_MACROS)),
            custom: Some(PoolConfig::new(9005, 5)),
        })
    }

    fn run(
        dispatcher: &mut SmallDispatcher,
        pool: PoolSelector,
        index: i32,
        argument: &str,
        recorder: &mut Recorder,
    ) -> Result<MacroOutcome, MacroError> {
        let mut executor = Recorder::default();
        let result = dispatcher.handle(pool, index, argument, &mut executor, recorder);
        recorder.submitted.extend(executor.submitted);
        result
    }

    #[test]
    fn test_select() {
        let d = dispatcher();
        assert_eq!(d.select(9000), Some((PoolSelector::Preset, 9000)));
        assert_eq!(d.select(9004), Some((PoolSelector::Preset, 9004)));
        assert_eq!(d.select(9005), Some((PoolSelector::Custom, 9005)));
        assert_eq!(d.select(9009), Some((PoolSelector::Custom, 9009)));
        assert_eq!(d.select(8999), None);
        assert_eq!(d.select(9010), None);
        assert_eq!(d.select(300), None);
    }

    #[test]
    fn test_define_then_play() {
        let mut d = dispatcher();
        let mut r = Recorder::default();
        assert_eq!(
            run(&mut d, PoolSelector::Preset, 9004, "M300 S100 P50|M300 S200 P50", &mut r),
            Ok(MacroOutcome::Defined { len: 27 })
        );
        assert!(r.submitted.is_empty());
        assert_eq!(run(&mut d, PoolSelector::Preset, 9004, "", &mut r), Ok(MacroOutcome::Played));
        assert_eq!(r.submitted, ["M300 S100 P50\nM300 S200 P50"]);

        // Custom slots of this dispatcher hold 16 bytes
        assert_eq!(
            run(&mut d, PoolSelector::Custom, 9005, "M300 S1|M300 S2", &mut r),
            Ok(MacroOutcome::Defined { len: 15 })
        );
        assert_eq!(run(&mut d, PoolSelector::Custom, 9005, "", &mut r), Ok(MacroOutcome::Played));
        assert_eq!(r.submitted[1], "M300 S1\nM300 S2");
        assert!(r.reports.is_empty());
    }

    #[test]
    fn test_too_long_reports_once() {
        let mut d = dispatcher();
        let mut r = Recorder::default();
        run(&mut d, PoolSelector::Custom, 9006, "M300 S1", &mut r).unwrap();
        // Exactly the slot size fits
        assert_eq!(
            run(&mut d, PoolSelector::Custom, 9006, "M300 S1|M300 S22", &mut r),
            Ok(MacroOutcome::Defined { len: 16 })
        );
        assert_eq!(
            run(&mut d, PoolSelector::Custom, 9006, "M300 S1|M300 S222", &mut r),
            Err(MacroError::CapacityExceeded { len: 17, capacity: 16 })
        );
        assert_eq!(r.reports, [SEQUENCE_TOO_LONG]);
        assert_eq!(d.slot_content(PoolSelector::Custom, 1), Some("M300 S1\nM300 S22"));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut d = dispatcher();
        let mut r = Recorder::default();
        // Custom pool has 3 slots, M9008 is claimed but addresses nothing
        for index in [9008, 9009, 9004, -1, i32::MAX] {
            assert_eq!(
                run(&mut d, PoolSelector::Custom, index, "M300", &mut r),
                Ok(MacroOutcome::Ignored)
            );
            assert_eq!(run(&mut d, PoolSelector::Custom, index, "", &mut r), Ok(MacroOutcome::Ignored));
        }
        assert!(r.submitted.is_empty());
        assert!(r.reports.is_empty());
    }

    #[test]
    fn test_empty_slot_play() {
        let mut d = dispatcher();
        let mut r = Recorder::default();
        assert_eq!(run(&mut d, PoolSelector::Custom, 9007, "", &mut r), Ok(MacroOutcome::EmptySlot));
        assert!(r.submitted.is_empty());
        assert!(r.reports.is_empty());
    }

    #[test]
    fn test_missing_pool_ignored() {
        let mut d: SmallDispatcher = MacroDispatcher::new(&MacroConfig {
            preset: Some(PoolConfig::new(9000, 5).with_defaults(PRESET_MACROS)),
            custom: None,
        });
        let mut r = Recorder::default();
        assert_eq!(d.select(9005), None);
        assert_eq!(run(&mut d, PoolSelector::Custom, 9005, "M300", &mut r), Ok(MacroOutcome::Ignored));
        assert_eq!(d.slot_content(PoolSelector::Custom, 0), None);
    }

    #[test]
    fn test_handle_trigger() {
        let mut d = dispatcher();
        let mut executor = Recorder::default();
        let mut diagnostics = Recorder::default();

        let trigger = Trigger::parse("M300 S100 P50").unwrap();
        assert_eq!(d.handle_trigger(&trigger, &mut executor, &mut diagnostics), None);

        let trigger = Trigger::parse("M9001").unwrap();
        assert_eq!(
            d.handle_trigger(&trigger, &mut executor, &mut diagnostics),
            Some(Ok(MacroOutcome::Played))
        );
        assert!(executor.submitted[0].starts_with("M300 S1396 P714\nM300 S932 P238\n"));
    }

    #[test]
    fn test_executor_rejection() {
        struct Full;
        impl Executor for Full {
            fn submit(&mut self, _: &str) -> Result<(), crate::ExecutorError> {
                Err(crate::ExecutorError::QueueFull { needed: 3, free: 0 })
            }
        }

        let mut d = dispatcher();
        let mut r = Recorder::default();
        assert_eq!(
            d.handle(PoolSelector::Preset, 9000, "", &mut Full, &mut r),
            Err(MacroError::Executor(crate::ExecutorError::QueueFull { needed: 3, free: 0 }))
        );
        assert!(r.reports.is_empty());
    }
}
