//! 课程权限解析与访问闸门
//!
//! 用户对一门课程的身份层级（CourseLevel）由与课程的关系推导：
//! 授课教师 > 修课学生 > 访客。路由/服务声明一个权限掩码
//! （CourseMask），闸门按位与判定是否放行；管理员一律放行，
//! 不经过层级解析。

use crate::models::courses::entities::Course;

/// 用户在某门课程中的身份层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CourseLevel {
    Guest = 0,   // 非课程人员
    Student = 1, // 修课学生
    Teacher = 2, // 授课教师
}

impl CourseLevel {
    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Guest => write!(f, "guest"),
            CourseLevel::Student => write!(f, "student"),
            CourseLevel::Teacher => write!(f, "teacher"),
        }
    }
}

/// 路由声明的课程权限要求（位掩码）
///
/// MEMBER = STUDENT | TEACHER，按位与后非零即放行。
/// GUEST 是例外：掩码为零时要求层级精确等于 Guest，
/// 与"未声明要求"（None）语义不同，两者不可混用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseMask(u8);

impl CourseMask {
    pub const GUEST: CourseMask = CourseMask(0);
    pub const STUDENT: CourseMask = CourseMask(1);
    pub const TEACHER: CourseMask = CourseMask(2);
    pub const MEMBER: CourseMask = CourseMask(1 | 2);

    pub fn bits(self) -> u8 {
        self.0
    }
}

/// 解析用户对课程的身份层级
///
/// `enrolled` 为 (course, user) 选课记录是否存在，由调用方查询；
/// 教师身份优先于学生身份。管理员不走这里。
pub fn resolve_level(course: &Course, user_id: i64, enrolled: bool) -> CourseLevel {
    if course.teacher_id == user_id {
        CourseLevel::Teacher
    } else if enrolled {
        CourseLevel::Student
    } else {
        CourseLevel::Guest
    }
}

/// 访问闸门
///
/// - 管理员一律放行
/// - 未声明要求（None）一律放行
/// - GUEST 掩码要求层级精确为 Guest
/// - 其余按位与非零放行
pub fn authorize(required: Option<CourseMask>, level: CourseLevel, is_admin: bool) -> bool {
    if is_admin {
        return true;
    }
    let Some(mask) = required else {
        return true;
    };
    if mask == CourseMask::GUEST {
        return level == CourseLevel::Guest;
    }
    (mask.bits() & level.bits()) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(teacher_id: i64) -> Course {
        Course {
            id: 1,
            name: "程序设计".to_string(),
            teacher_id,
            enroll_secret: "s3cret".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_resolve_teacher_wins_over_enrollment() {
        let c = course(7);
        assert_eq!(resolve_level(&c, 7, true), CourseLevel::Teacher);
        assert_eq!(resolve_level(&c, 7, false), CourseLevel::Teacher);
    }

    #[test]
    fn test_resolve_student_and_guest() {
        let c = course(7);
        assert_eq!(resolve_level(&c, 8, true), CourseLevel::Student);
        assert_eq!(resolve_level(&c, 8, false), CourseLevel::Guest);
    }

    #[test]
    fn test_admin_always_authorized() {
        for level in [CourseLevel::Guest, CourseLevel::Student, CourseLevel::Teacher] {
            assert!(authorize(Some(CourseMask::TEACHER), level, true));
            assert!(authorize(Some(CourseMask::GUEST), level, true));
            assert!(authorize(None, level, true));
        }
    }

    #[test]
    fn test_none_means_unrestricted() {
        for level in [CourseLevel::Guest, CourseLevel::Student, CourseLevel::Teacher] {
            assert!(authorize(None, level, false));
        }
    }

    #[test]
    fn test_guest_mask_is_exact_match() {
        // 零掩码不是"无限制"，只放行访客本身
        assert!(authorize(Some(CourseMask::GUEST), CourseLevel::Guest, false));
        assert!(!authorize(
            Some(CourseMask::GUEST),
            CourseLevel::Student,
            false
        ));
        assert!(!authorize(
            Some(CourseMask::GUEST),
            CourseLevel::Teacher,
            false
        ));
    }

    #[test]
    fn test_member_mask_covers_student_and_teacher() {
        assert!(authorize(
            Some(CourseMask::MEMBER),
            CourseLevel::Student,
            false
        ));
        assert!(authorize(
            Some(CourseMask::MEMBER),
            CourseLevel::Teacher,
            false
        ));
        assert!(!authorize(
            Some(CourseMask::MEMBER),
            CourseLevel::Guest,
            false
        ));
    }

    #[test]
    fn test_single_role_masks() {
        assert!(authorize(
            Some(CourseMask::STUDENT),
            CourseLevel::Student,
            false
        ));
        assert!(!authorize(
            Some(CourseMask::STUDENT),
            CourseLevel::Teacher,
            false
        ));
        assert!(authorize(
            Some(CourseMask::TEACHER),
            CourseLevel::Teacher,
            false
        ));
        assert!(!authorize(
            Some(CourseMask::TEACHER),
            CourseLevel::Student,
            false
        ));
    }

    #[test]
    fn test_member_is_monotone_over_single_masks() {
        // MEMBER 放行的层级，对应的单角色掩码也必定放行
        for level in [CourseLevel::Student, CourseLevel::Teacher] {
            if authorize(Some(CourseMask::MEMBER), level, false) {
                let single = authorize(Some(CourseMask::STUDENT), level, false)
                    || authorize(Some(CourseMask::TEACHER), level, false);
                assert!(single);
            }
        }
    }
}
