pub mod service;

/// Тексты ответов API
pub mod messages {
    pub const LISTED: &str = "직급 목록을 조회했습니다.";
    pub const FETCHED: &str = "직급을 조회했습니다.";
    pub const CREATED: &str = "직급이 생성되었습니다.";
    pub const UPDATED: &str = "직급이 수정되었습니다.";
    pub const PATCHED: &str = "직급 일부 정보가 수정되었습니다.";
    pub const DELETED: &str = "직급이 삭제되었습니다.";
    pub const SYNCED: &str = "직급 그리드를 저장했습니다.";

    pub const NOT_FOUND: &str = "직급을 찾을 수 없습니다.";
    pub const DUPLICATE_NAME: &str = "이미 존재하는 직급명입니다.";
    pub const HAS_USERS: &str = "사용자가 등록된 직급은 삭제할 수 없습니다.";
    pub const EMPTY_GRID: &str = "업로드할 직급 데이터가 없습니다.";
}
