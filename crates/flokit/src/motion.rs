use crate::state::OpenState;

/// Per-index start delay for cascading items, in seconds.
pub const STAGGER: f64 = 0.05;
pub const OPEN_ROTATION_DEG: f64 = 90.0;

const MAX_SUBSTEP: f64 = 1.0 / 240.0;
const MAX_FRAME: f64 = 0.1; // long stalls are not replayed

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

/// Items travel on a normalized 0..1 progress value.
pub const ITEM_SPRING: SpringConfig = SpringConfig {
    stiffness: 400.0,
    damping: 25.0,
    rest_delta: 0.0005,
    rest_speed: 0.005,
};

/// Toggle rotation, in degrees.
pub const SPIN_SPRING: SpringConfig = SpringConfig {
    stiffness: 500.0,
    damping: 25.0,
    rest_delta: 0.05,
    rest_speed: 0.5,
};

/// Damped spring with unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Velocity is kept, so a reversal mid-flight bends instead of jumping.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds; returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    delay: f64,
    target: f64,
}

/// Enter/exit motion of one expanded item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMotion {
    spring: Spring,
    pending: Option<Pending>,
}

impl Default for ItemMotion {
    fn default() -> Self {
        Self {
            spring: Spring::new(ITEM_SPRING, 0.0),
            pending: None,
        }
    }
}

impl ItemMotion {
    pub fn schedule(&mut self, target: f64, delay: f64) {
        if delay > 0.0 {
            self.pending = Some(Pending { delay, target });
        } else {
            self.pending = None;
            self.spring.set_target(target);
        }
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        let mut dt = dt;
        if let Some(pending) = self.pending.as_mut() {
            // The previous motion keeps running while the delay elapses.
            let waited = pending.delay.min(dt);
            pending.delay -= dt;
            if pending.delay > 0.0 {
                self.spring.step(dt);
                return true;
            }
            let target = pending.target;
            self.pending = None;
            self.spring.step(waited);
            self.spring.set_target(target);
            dt -= waited;
        }
        self.spring.step(dt)
    }

    /// 0 when collapsed onto the toggle, 1 at the layout offset.
    pub fn progress(&self) -> f64 {
        self.spring.value()
    }

    pub fn scale(&self) -> f64 {
        0.5 + 0.5 * self.progress()
    }

    pub fn opacity(&self) -> f64 {
        self.progress().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || !self.spring.is_settled()
    }

    /// Unmounted once it has come to rest collapsed with nothing queued.
    pub fn is_mounted(&self) -> bool {
        self.pending.is_some_and(|p| p.target > 0.0)
            || self.spring.target() != 0.0
            || !self.spring.is_settled()
    }
}

/// All running animations of one widget instance.
#[derive(Debug, Clone)]
pub struct Choreography {
    items: Vec<ItemMotion>,
    spin: Spring,
}

impl Choreography {
    pub fn new(count: usize) -> Self {
        Self {
            items: vec![ItemMotion::default(); count],
            spin: Spring::new(SPIN_SPRING, 0.0),
        }
    }

    /// Start the cascade toward `state`.
    pub fn play(&mut self, state: OpenState) {
        let target = if state.is_open() { 1.0 } else { 0.0 };
        for (i, item) in self.items.iter_mut().enumerate() {
            item.schedule(target, i as f64 * STAGGER);
        }
        self.spin.set_target(target * OPEN_ROTATION_DEG);
    }

    /// Match a new item count; added items follow the current state.
    pub fn resize(&mut self, count: usize, state: OpenState) {
        let old = self.items.len();
        self.items.resize(count, ItemMotion::default());
        if state.is_open() {
            for (i, item) in self.items.iter_mut().enumerate().skip(old) {
                item.schedule(1.0, i as f64 * STAGGER);
            }
        }
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        let spinning = self.spin.step(dt);
        self.items
            .iter_mut()
            .fold(spinning, |active, item| item.advance(dt) || active)
    }

    pub fn is_animating(&self) -> bool {
        !self.spin.is_settled() || self.items.iter().any(ItemMotion::is_animating)
    }

    pub fn item(&self, index: usize) -> Option<&ItemMotion> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rotation_deg(&self) -> f64 {
        self.spin.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(c: &mut Choreography, seconds: f64) {
        let frames = (seconds / FRAME).round() as usize;
        for _ in 0..frames {
            c.advance(FRAME);
        }
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(ITEM_SPRING, 0.0);
        spring.set_target(1.0);
        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 120, "spring did not settle within two seconds");
        }
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_spring_overshoots() {
        let mut spring = Spring::new(ITEM_SPRING, 0.0);
        spring.set_target(1.0);
        let mut peak: f64 = 0.0;
        for _ in 0..60 {
            spring.step(FRAME);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0 && peak < 1.1);
    }

    #[test]
    fn test_reversal_keeps_velocity() {
        let mut spring = Spring::new(ITEM_SPRING, 0.0);
        spring.set_target(1.0);
        for _ in 0..3 {
            spring.step(FRAME);
        }
        let (value, velocity) = (spring.value(), spring.velocity());
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.value(), value);
        assert_eq!(spring.velocity(), velocity);

        spring.step(FRAME);
        assert!(spring.value() > value, "momentum carries past the reversal point");
    }

    #[test]
    fn test_open_mounts_everything_invisible() {
        let mut c = Choreography::new(4);
        c.play(OpenState::Open);
        for i in 0..4 {
            let item = c.item(i).unwrap();
            assert!(item.is_mounted());
            assert_eq!(item.opacity(), 0.0);
            assert_eq!(item.scale(), 0.5);
        }
    }

    #[test]
    fn test_stagger_cascades() {
        let mut c = Choreography::new(3);
        c.play(OpenState::Open);
        c.advance(0.06);
        assert!(c.item(0).unwrap().progress() > 0.0);
        assert!(c.item(1).unwrap().progress() > 0.0);
        assert_eq!(c.item(2).unwrap().progress(), 0.0);

        c.advance(0.05);
        assert!(c.item(2).unwrap().progress() > 0.0);
        assert!(c.item(0).unwrap().progress() > c.item(2).unwrap().progress());
    }

    #[test]
    fn test_close_unmounts_after_rest() {
        let mut c = Choreography::new(2);
        c.play(OpenState::Open);
        run(&mut c, 2.0);
        assert!(!c.is_animating());
        assert_eq!(c.rotation_deg(), 90.0);
        assert_eq!(c.item(1).unwrap().progress(), 1.0);

        c.play(OpenState::Closed);
        assert!(c.item(1).unwrap().is_mounted());
        run(&mut c, 2.0);
        assert!(!c.is_animating());
        assert_eq!(c.rotation_deg(), 0.0);
        assert!(!c.item(0).unwrap().is_mounted());
        assert!(!c.item(1).unwrap().is_mounted());
    }

    #[test]
    fn test_rapid_toggle_reverses() {
        let mut c = Choreography::new(1);
        c.play(OpenState::Open);
        run(&mut c, 0.1);
        let mid = c.item(0).unwrap().progress();
        assert!(mid > 0.0 && mid < 1.0);

        c.play(OpenState::Closed);
        run(&mut c, 2.0);
        assert_eq!(c.item(0).unwrap().progress(), 0.0);
        assert!(!c.item(0).unwrap().is_mounted());
    }

    #[test]
    fn test_resize_follows_state() {
        let mut c = Choreography::new(1);
        c.play(OpenState::Open);
        run(&mut c, 2.0);

        c.resize(3, OpenState::Open);
        assert_eq!(c.len(), 3);
        assert!(c.item(2).unwrap().is_mounted());
        run(&mut c, 2.0);
        assert_eq!(c.item(2).unwrap().progress(), 1.0);

        c.resize(1, OpenState::Open);
        assert!(c.item(1).is_none());
    }
}
