use crate::{Ball, Paddle, Rally};

/// Speed tiers in ascending score-threshold order. Checked every tick;
/// when several match, later rows overwrite earlier ones within the same
/// tick (in practice thresholds are crossed one point at a time).
const SCORE_TIERS: [(u32, u32); 4] = [(5, 2), (10, 3), (15, 4), (30, 5)];

/// Rally-length bump: fires on exact equality only. The counter is never
/// reset, so this is a one-time event per game.
const RALLY_THRESHOLD: u32 = 10;
const RALLY_TIER: u32 = 2;

/// Map cumulative score and rally length to the current speed tier.
///
/// Mutates the ball and both paddles: each matching tier is applied to
/// both sides through `Paddle::apply_speed_tier`, which also rewrites the
/// ball's velocity. Returns nothing; the mutation is the point.
pub fn apply_speed_policy(ball: &mut Ball, left: &mut Paddle, right: &mut Paddle, rally: &Rally) {
    for (threshold, tier) in SCORE_TIERS {
        if left.score >= threshold || right.score >= threshold {
            left.apply_speed_tier(ball, tier, tier, tier);
            right.apply_speed_tier(ball, tier, tier, tier);
        }
    }

    if rally.hits == RALLY_THRESHOLD {
        left.apply_speed_tier(ball, RALLY_TIER, RALLY_TIER, RALLY_TIER);
        right.apply_speed_tier(ball, RALLY_TIER, RALLY_TIER, RALLY_TIER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Ball, Paddle, Paddle) {
        let ball = Ball::new(Vec2::new(400.0, 300.0), 6, 1, 1);
        let left = Paddle::from_center(Vec2::new(10.0, 300.0), 10, 70, 1);
        let right = Paddle::from_center(Vec2::new(790.0, 300.0), 10, 70, 1);
        (ball, left, right)
    }

    #[test]
    fn test_below_first_threshold_keeps_base_speed() {
        let (mut ball, mut left, mut right) = setup();
        left.score = 4;
        apply_speed_policy(&mut ball, &mut left, &mut right, &Rally::new());
        assert_eq!((ball.dx, ball.dy), (1, 1));
        assert_eq!((left.dy, right.dy), (1, 1));
    }

    #[test]
    fn test_score_five_sets_tier_two() {
        let (mut ball, mut left, mut right) = setup();
        left.score = 5;
        apply_speed_policy(&mut ball, &mut left, &mut right, &Rally::new());
        assert_eq!((ball.dx, ball.dy), (2, 2));
        assert_eq!(left.dy, 2, "Both paddles move to the same tier");
        assert_eq!(right.dy, 2);
    }

    #[test]
    fn test_either_side_triggers_tier() {
        let (mut ball, mut left, mut right) = setup();
        right.score = 5;
        apply_speed_policy(&mut ball, &mut left, &mut right, &Rally::new());
        assert_eq!((ball.dx, ball.dy), (2, 2));
    }

    #[test]
    fn test_score_thirty_sets_tier_five() {
        let (mut ball, mut left, mut right) = setup();
        right.score = 30;
        apply_speed_policy(&mut ball, &mut left, &mut right, &Rally::new());
        // All four rows match; the last one wins.
        assert_eq!((ball.dx, ball.dy), (5, 5));
        assert_eq!((left.dy, right.dy), (5, 5));
    }

    #[test]
    fn test_rally_at_ten_sets_tier_two() {
        let (mut ball, mut left, mut right) = setup();
        let rally = Rally { hits: 10 };
        apply_speed_policy(&mut ball, &mut left, &mut right, &rally);
        assert_eq!((ball.dx, ball.dy), (2, 2));
        assert_eq!((left.dy, right.dy), (2, 2));
    }

    #[test]
    fn test_rally_rule_overrides_score_tier() {
        // The rally row runs last, so at rally == 10 it wins even against a
        // higher score tier on the same tick.
        let (mut ball, mut left, mut right) = setup();
        left.score = 15;
        let rally = Rally { hits: 10 };
        apply_speed_policy(&mut ball, &mut left, &mut right, &rally);
        assert_eq!((ball.dx, ball.dy), (2, 2));
    }

    #[test]
    fn test_rally_past_ten_never_retriggers() {
        // Documented quirk: exact equality, counter never reset. Once the
        // count passes 10 the rally bump is gone for the rest of the game.
        let (mut ball, mut left, mut right) = setup();
        left.score = 15;
        apply_speed_policy(&mut ball, &mut left, &mut right, &Rally { hits: 11 });
        assert_eq!((ball.dx, ball.dy), (4, 4), "Score tier stands, rally row dormant");
    }
}
