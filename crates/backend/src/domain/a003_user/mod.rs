pub mod service;

/// Тексты ответов API
pub mod messages {
    pub const LISTED: &str = "사용자 목록을 조회했습니다.";
    pub const FETCHED: &str = "사용자를 조회했습니다.";
    pub const CREATED: &str = "사용자가 생성되었습니다.";
    pub const UPDATED: &str = "사용자가 수정되었습니다.";
    pub const PATCHED: &str = "사용자 일부 정보가 수정되었습니다.";
    pub const DELETED: &str = "사용자가 삭제되었습니다.";
    pub const SYNCED: &str = "사용자 그리드를 저장했습니다.";

    pub const NOT_FOUND: &str = "사용자를 찾을 수 없습니다.";
    pub const DUPLICATE_EMAIL: &str = "이미 존재하는 이메일입니다.";
    pub const EMPTY_GRID: &str = "업로드할 사용자 데이터가 없습니다.";
}
