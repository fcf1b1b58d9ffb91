//! Walking and idle animation state shared by the player and enemies.

use bevy::prelude::*;

use super::cycle::AnimationCycle;

/// Direction of a walking animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkDirection {
    Down,
    Up,
    Left,
    Right,
}

impl WalkDirection {
    /// Display priority when several directions are held at once.
    pub const PRIORITY: [WalkDirection; 4] = [
        WalkDirection::Down,
        WalkDirection::Up,
        WalkDirection::Left,
        WalkDirection::Right,
    ];

    fn slot(self) -> usize {
        match self {
            WalkDirection::Down => 0,
            WalkDirection::Up => 1,
            WalkDirection::Left => 2,
            WalkDirection::Right => 3,
        }
    }
}

/// Per-direction "moved this tick" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkFlags {
    pub down: bool,
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl WalkFlags {
    /// Flags for a screen-space step (y grows downward).
    pub fn from_step(step: Vec2) -> Self {
        Self {
            down: step.y > 0.0,
            up: step.y < 0.0,
            left: step.x < 0.0,
            right: step.x > 0.0,
        }
    }

    pub fn is_set(&self, direction: WalkDirection) -> bool {
        match direction {
            WalkDirection::Down => self.down,
            WalkDirection::Up => self.up,
            WalkDirection::Left => self.left,
            WalkDirection::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: WalkDirection) {
        match direction {
            WalkDirection::Down => self.down = true,
            WalkDirection::Up => self.up = true,
            WalkDirection::Left => self.left = true,
            WalkDirection::Right => self.right = true,
        }
    }

    pub fn any(&self) -> bool {
        self.down || self.up || self.left || self.right
    }

    /// The direction whose walk cycle is displayed.
    pub fn primary(&self) -> Option<WalkDirection> {
        WalkDirection::PRIORITY
            .into_iter()
            .find(|direction| self.is_set(*direction))
    }
}

/// What a combatant's body sprite shows this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    Walking(WalkDirection),
    Attacking,
}

impl VisualState {
    /// Attacking wins over walking, idle is the default.
    pub fn resolve(attacking: bool, walk: WalkFlags) -> Self {
        if attacking {
            VisualState::Attacking
        } else if let Some(direction) = walk.primary() {
            VisualState::Walking(direction)
        } else {
            VisualState::Idle
        }
    }
}

/// Frame handles for the four walking directions.
#[derive(Debug, Clone, Default)]
pub struct WalkSheets {
    pub down: Vec<Handle<Image>>,
    pub up: Vec<Handle<Image>>,
    pub left: Vec<Handle<Image>>,
    pub right: Vec<Handle<Image>>,
}

/// Body animation of a combatant: one looping cycle per walk direction plus
/// an idle frame.
#[derive(Component, Debug, Clone)]
pub struct CombatantAnimation {
    idle: Option<Handle<Image>>,
    walks: [AnimationCycle<Handle<Image>>; 4],
    active: Option<WalkDirection>,
    flags: WalkFlags,
}

impl CombatantAnimation {
    pub fn new(idle: Option<Handle<Image>>, sheets: WalkSheets, ticks_per_frame: u32) -> Self {
        Self {
            idle,
            walks: [
                AnimationCycle::looping(sheets.down, ticks_per_frame),
                AnimationCycle::looping(sheets.up, ticks_per_frame),
                AnimationCycle::looping(sheets.left, ticks_per_frame),
                AnimationCycle::looping(sheets.right, ticks_per_frame),
            ],
            active: None,
            flags: WalkFlags::default(),
        }
    }

    /// A combatant with a single static sprite and no walk frames.
    pub fn still(image: Handle<Image>) -> Self {
        Self::new(Some(image), WalkSheets::default(), 1)
    }

    /// Record this tick's walk flags and advance the displayed walk cycle.
    ///
    /// Switching direction restarts the new cycle; standing still rewinds.
    pub fn update_walk(&mut self, flags: WalkFlags) {
        self.flags = flags;

        match flags.primary() {
            Some(direction) => {
                if self.active != Some(direction) {
                    self.walks[direction.slot()].reset();
                    self.active = Some(direction);
                }
                self.walks[direction.slot()].advance();
            }
            None => {
                if let Some(previous) = self.active.take() {
                    self.walks[previous.slot()].reset();
                }
            }
        }
    }

    pub fn flags(&self) -> WalkFlags {
        self.flags
    }

    pub fn walk_cycle(&self, direction: WalkDirection) -> &AnimationCycle<Handle<Image>> {
        &self.walks[direction.slot()]
    }

    /// Body frame for the given visual state, falling back to idle when the
    /// walk direction has no frames.
    pub fn body_frame(&self, state: VisualState) -> Option<&Handle<Image>> {
        match state {
            VisualState::Walking(direction) => self
                .walk_cycle(direction)
                .current()
                .or(self.idle.as_ref()),
            VisualState::Idle | VisualState::Attacking => self.idle.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(id: u128) -> Handle<Image> {
        Handle::weak_from_u128(id)
    }

    fn sheets() -> WalkSheets {
        WalkSheets {
            down: vec![handle(10), handle(11)],
            up: vec![handle(20), handle(21)],
            left: vec![handle(30), handle(31)],
            right: vec![handle(40), handle(41)],
        }
    }

    #[test]
    fn priority_is_down_up_left_right() {
        let all = WalkFlags { down: true, up: true, left: true, right: true };
        assert_eq!(all.primary(), Some(WalkDirection::Down));

        let up_right = WalkFlags { up: true, right: true, ..default() };
        assert_eq!(up_right.primary(), Some(WalkDirection::Up));

        let left_right = WalkFlags { left: true, right: true, ..default() };
        assert_eq!(left_right.primary(), Some(WalkDirection::Left));

        assert_eq!(WalkFlags::default().primary(), None);
    }

    #[test]
    fn attack_overrides_walking() {
        let walking = WalkFlags { left: true, ..default() };
        assert_eq!(VisualState::resolve(true, walking), VisualState::Attacking);
        assert_eq!(
            VisualState::resolve(false, walking),
            VisualState::Walking(WalkDirection::Left)
        );
        assert_eq!(VisualState::resolve(false, WalkFlags::default()), VisualState::Idle);
    }

    #[test]
    fn step_flags_follow_screen_axes() {
        let flags = WalkFlags::from_step(Vec2::new(-2.0, 2.0));
        assert!(flags.left && flags.down);
        assert!(!flags.right && !flags.up);
        assert!(!WalkFlags::from_step(Vec2::ZERO).any());
    }

    #[test]
    fn walking_advances_only_the_displayed_cycle() {
        let mut anim = CombatantAnimation::new(Some(handle(1)), sheets(), 2);
        let both = WalkFlags { down: true, right: true, ..default() };

        anim.update_walk(both);
        anim.update_walk(both);
        assert_eq!(anim.walk_cycle(WalkDirection::Down).index(), 1);
        assert_eq!(anim.walk_cycle(WalkDirection::Right).index(), 0);
        assert_eq!(
            anim.body_frame(VisualState::resolve(false, both)),
            Some(&handle(11))
        );
    }

    #[test]
    fn standing_still_rewinds_to_idle() {
        let mut anim = CombatantAnimation::new(Some(handle(1)), sheets(), 1);
        let up = WalkFlags { up: true, ..default() };
        anim.update_walk(up);
        assert_eq!(anim.walk_cycle(WalkDirection::Up).index(), 1);

        anim.update_walk(WalkFlags::default());
        assert_eq!(anim.walk_cycle(WalkDirection::Up).index(), 0);
        assert_eq!(anim.body_frame(VisualState::Idle), Some(&handle(1)));
    }

    #[test]
    fn empty_walk_sheet_falls_back_to_idle() {
        let mut anim = CombatantAnimation::still(handle(5));
        let left = WalkFlags { left: true, ..default() };
        anim.update_walk(left);
        assert_eq!(
            anim.body_frame(VisualState::Walking(WalkDirection::Left)),
            Some(&handle(5))
        );
    }
}
