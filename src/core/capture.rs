use crate::core::creature::Combatant;
use crate::core::utils::roll_range;

/// Ball multiplier at or above this value always captures.
pub const MASTER_BALL_MULTIPLIER: f64 = 255.0;

const SHAKE_CHECKS: u32 = 4;

const SHAKE_MESSAGES: [&str; 3] = [
    "The ball wobbles...",
    "The ball wobbles again...",
    "The ball wobbles one last time...",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureResult {
    pub captured: bool,
    pub shakes: u32,
    pub log: Vec<String>,
}

/// `(3*maxHP - 2*hp) / (3*maxHP)`: 1/3 at full health, close to 1 at 1 HP.
pub fn hp_factor(target: &Combatant) -> f64 {
    let max_hp = target.max_hp().max(1) as f64;
    let hp = target.hp.max(0) as f64;
    (3.0 * max_hp - 2.0 * hp) / (3.0 * max_hp)
}

pub fn capture_value(target: &Combatant, ball_multiplier: f64, status_bonus: f64) -> f64 {
    hp_factor(target) * target.capture_rate as f64 * ball_multiplier * status_bonus
}

pub fn shake_threshold(value: f64) -> f64 {
    let a = value.max(1.0);
    65536.0 / (255.0 / a).powf(0.1875)
}

pub fn attempt_capture(
    target: &Combatant,
    ball_name: &str,
    ball_multiplier: f64,
    rng: &mut dyn FnMut() -> f64,
) -> CaptureResult {
    let mut log = vec![format!("You threw a {}!", ball_name)];

    if ball_multiplier >= MASTER_BALL_MULTIPLIER {
        log.push(format!("The {} never misses!", ball_name));
        log.push(format!("{} was caught!", target.name));
        return CaptureResult { captured: true, shakes: 3, log };
    }

    let value = capture_value(target, ball_multiplier, target.status.capture_bonus());
    if value >= 255.0 {
        log.push(format!("{} was caught!", target.name));
        return CaptureResult { captured: true, shakes: 3, log };
    }

    let threshold = shake_threshold(value);
    let mut shakes = 0;
    for _ in 0..SHAKE_CHECKS {
        let check = roll_range(rng, 0, 65535) as f64;
        if check < threshold {
            shakes += 1;
        } else {
            break;
        }
    }
    tracing::debug!(target = %target.name, value, threshold, shakes, "capture shakes");

    for message in SHAKE_MESSAGES.iter().take(shakes.min(3) as usize) {
        log.push(message.to_string());
    }

    let captured = shakes >= SHAKE_CHECKS;
    if captured {
        log.push(format!("Gotcha! {} was caught!", target.name));
    } else {
        log.push(format!("Oh no! {} broke free!", target.name));
    }
    CaptureResult { captured, shakes, log }
}

/// Display-only estimate in percent, one decimal.
pub fn approximate_probability(target: &Combatant, ball_multiplier: f64, status_bonus: f64) -> f64 {
    if ball_multiplier >= MASTER_BALL_MULTIPLIER {
        return 100.0;
    }
    let value = capture_value(target, ball_multiplier, status_bonus);
    if value >= 255.0 {
        return 100.0;
    }
    if value <= 0.0 {
        return 0.0;
    }
    let pct = (value / 255.0).powf(0.75) * 100.0;
    let rounded = (pct * 10.0).round() / 10.0;
    rounded.clamp(0.1, 100.0)
}
