use serde::Deserialize;

// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    // 用户名或邮箱
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 自助注册请求
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    // 密码验证：两次输入必须一致
    pub password2: String,
    // 真实姓名（必填）
    pub real_name: String,
    // 学校名称（必填）
    pub school: String,
}
