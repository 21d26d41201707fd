//! 成绩与积点换算
//!
//! 成绩分三档：90 分（含）以上 2 点、80（含）~90 分 1 点、
//! 80 分以下 0 点。评分只有在换算结果跨档时才写积点流水，
//! 同档内改分不留痕。

/// 繳交作业一律累积 2 点
pub const SUBMISSION_POINTS: i32 = 2;

/// 提交流水的事由
pub const SUBMISSION_REASON: &str = "submission";

/// 成绩转换为积点（阶梯函数，档位下界含端点）
pub fn points_for(score: i32) -> i32 {
    if score >= 90 {
        2
    } else if score >= 80 {
        1
    } else {
        0
    }
}

/// 评分产生的积点增量；同档返回 None（不落账）
pub fn grading_delta(old_score: i32, new_score: i32) -> Option<i32> {
    let old_points = points_for(old_score);
    let new_points = points_for(new_score);
    if old_points == new_points {
        None
    } else {
        Some(new_points - old_points)
    }
}

/// 评分流水的事由文本
pub fn grading_reason(old_score: i32, new_score: i32) -> String {
    format!("grading: {old_score}->{new_score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_tiers() {
        assert_eq!(points_for(100), 2);
        assert_eq!(points_for(90), 2);
        assert_eq!(points_for(89), 1);
        assert_eq!(points_for(80), 1);
        assert_eq!(points_for(79), 0);
        assert_eq!(points_for(0), 0);
    }

    #[test]
    fn test_same_tier_regrade_is_silent() {
        assert_eq!(grading_delta(95, 92), None);
        assert_eq!(grading_delta(85, 80), None);
        assert_eq!(grading_delta(0, 70), None);
    }

    #[test]
    fn test_cross_tier_deltas() {
        // 未评分(0) -> 85：0 点升 1 点
        assert_eq!(grading_delta(0, 85), Some(1));
        // 85 -> 92：1 点升 2 点
        assert_eq!(grading_delta(85, 92), Some(1));
        // 92 -> 91：同档，无流水
        assert_eq!(grading_delta(92, 91), None);
        // 92 -> 75：2 点降 0 点
        assert_eq!(grading_delta(92, 75), Some(-2));
    }

    #[test]
    fn test_grading_reason_format() {
        assert_eq!(grading_reason(0, 85), "grading: 0->85");
        assert_eq!(grading_reason(85, 92), "grading: 85->92");
    }
}
