use serde::Deserialize;

// 繳交作业请求
//
// assignment_id 与提交人一律取自路径与会话，
// 请求体即使携带同名字段也会被忽略。
#[derive(Debug, Deserialize)]
pub struct SubmitWorkRequest {
    #[serde(default)]
    pub memo: String,
    pub attachment_token: Option<String>,
}

// 修改提交请求（仅限本人且未评分）
#[derive(Debug, Deserialize)]
pub struct UpdateWorkRequest {
    pub memo: Option<String>,
    pub attachment_token: Option<String>,
}

// 批改请求
#[derive(Debug, Deserialize)]
pub struct ScoreWorkRequest {
    pub score: i32,
}
