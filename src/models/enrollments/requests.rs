use serde::Deserialize;

// 选修课程请求
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    // 选课密码，与课程的 enroll_secret 精确比对
    pub secret: String,
    #[serde(default)]
    pub seat: i32,
}

// 变更座号请求
#[derive(Debug, Deserialize)]
pub struct UpdateSeatRequest {
    pub seat: i32,
}
