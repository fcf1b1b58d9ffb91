//! Frame cycling shared by every animated sprite.

/// How a cycle behaves when it runs past its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Wrap back to the first frame forever (walking).
    Looping,
    /// Play once, then report completion and rewind (attacking).
    OneShot,
}

/// Outcome of a single [`AnimationCycle::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// The current frame is still being held (or there are no frames).
    Held,
    /// The cycle moved to the frame at this index.
    Stepped(usize),
    /// A one-shot cycle ran past its last frame and rewound to index 0.
    Completed,
}

/// An ordered frame sequence with a per-frame hold timer.
///
/// `advance` is called once per tick while the owning state is active. The
/// index is always inside `[0, len)` when frames exist.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCycle<F> {
    frames: Vec<F>,
    index: usize,
    counter: u32,
    ticks_per_frame: u32,
    mode: CycleMode,
}

impl<F> AnimationCycle<F> {
    pub fn new(frames: Vec<F>, ticks_per_frame: u32, mode: CycleMode) -> Self {
        Self {
            frames,
            index: 0,
            counter: 0,
            ticks_per_frame: ticks_per_frame.max(1),
            mode,
        }
    }

    pub fn looping(frames: Vec<F>, ticks_per_frame: u32) -> Self {
        Self::new(frames, ticks_per_frame, CycleMode::Looping)
    }

    pub fn one_shot(frames: Vec<F>, ticks_per_frame: u32) -> Self {
        Self::new(frames, ticks_per_frame, CycleMode::OneShot)
    }

    /// Count one tick and step the frame when the hold time is reached.
    ///
    /// Advancing a cycle with no frames changes nothing.
    pub fn advance(&mut self) -> CycleEvent {
        if self.frames.is_empty() {
            return CycleEvent::Held;
        }

        self.counter += 1;
        if self.counter < self.ticks_per_frame {
            return CycleEvent::Held;
        }
        self.counter = 0;

        match self.mode {
            CycleMode::Looping => {
                self.index = (self.index + 1) % self.frames.len();
                CycleEvent::Stepped(self.index)
            }
            CycleMode::OneShot if self.index + 1 >= self.frames.len() => {
                self.index = 0;
                CycleEvent::Completed
            }
            CycleMode::OneShot => {
                self.index += 1;
                CycleEvent::Stepped(self.index)
            }
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.counter = 0;
    }

    /// Swap in a new frame sequence and rewind.
    pub fn load(&mut self, frames: Vec<F>) {
        self.frames = frames;
        self.reset();
    }

    pub fn current(&self) -> Option<&F> {
        self.frames.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_each_frame_for_configured_ticks() {
        let mut cycle = AnimationCycle::looping(vec!['a', 'b'], 8);
        for _ in 0..7 {
            assert_eq!(cycle.advance(), CycleEvent::Held);
        }
        assert_eq!(cycle.advance(), CycleEvent::Stepped(1));
        assert_eq!(cycle.current(), Some(&'b'));
    }

    #[test]
    fn looping_wraps_and_never_completes() {
        let mut cycle = AnimationCycle::looping(vec![0, 1, 2], 1);
        for tick in 0..100 {
            let event = cycle.advance();
            assert_ne!(event, CycleEvent::Completed);
            assert!(cycle.index() < 3);
            assert_eq!(cycle.index(), (tick + 1) % 3);
        }
    }

    #[test]
    fn one_shot_completes_after_one_pass() {
        for len in 1..6 {
            let mut cycle = AnimationCycle::one_shot((0..len).collect(), 1);
            for step in 1..len {
                assert_eq!(cycle.advance(), CycleEvent::Stepped(step));
            }
            assert_eq!(cycle.advance(), CycleEvent::Completed);
            assert_eq!(cycle.index(), 0);
        }
    }

    #[test]
    fn one_shot_respects_hold_time() {
        let mut cycle = AnimationCycle::one_shot(vec!["l1", "l2"], 3);
        let completions = (0..6)
            .map(|_| cycle.advance())
            .filter(|e| *e == CycleEvent::Completed)
            .count();
        assert_eq!(completions, 1);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn empty_cycle_is_a_no_op() {
        let mut cycle: AnimationCycle<u8> = AnimationCycle::one_shot(Vec::new(), 1);
        assert_eq!(cycle.advance(), CycleEvent::Held);
        assert_eq!(cycle.index(), 0);
        assert!(cycle.current().is_none());
    }

    #[test]
    fn reset_and_load_rewind() {
        let mut cycle = AnimationCycle::looping(vec![1, 2, 3], 2);
        cycle.advance();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 1);

        cycle.reset();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.advance(), CycleEvent::Held);

        cycle.load(vec![9]);
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), Some(&9));
    }
}
