pub mod service;

/// Тексты ответов API (показываются в UI как есть)
pub mod messages {
    pub const LISTED: &str = "조직 목록을 조회했습니다.";
    pub const FETCHED: &str = "조직을 조회했습니다.";
    pub const CREATED: &str = "조직이 생성되었습니다.";
    pub const UPDATED: &str = "조직이 수정되었습니다.";
    pub const PATCHED: &str = "조직 일부 정보가 수정되었습니다.";
    pub const DELETED: &str = "조직이 삭제되었습니다.";
    pub const SYNCED: &str = "조직 그리드를 저장했습니다.";

    pub const NOT_FOUND: &str = "조직을 찾을 수 없습니다.";
    pub const DUPLICATE_NAME: &str = "이미 존재하는 조직명입니다.";
    pub const HAS_CHILDREN: &str = "하위 조직이 있어 삭제할 수 없습니다.";
    pub const HAS_RANKS: &str = "직급이 등록된 조직은 삭제할 수 없습니다.";
    pub const EMPTY_GRID: &str = "업로드할 조직 데이터가 없습니다.";
}
