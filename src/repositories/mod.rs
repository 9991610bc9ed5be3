//! 데이터 액세스 계층
//!
//! 모든 리포지토리는 `Arc<Database>`를 주입받는 단순 구조체입니다.
//! 동시 호출 간의 정합성(이메일 유일성, 코드 단일 사용)은 애플리케이션
//! 레벨 락이 아니라 저장소의 원자적 연산(유니크 인덱스, 조건부
//! find_one_and_update)에 의존합니다. 핸들러가 여러 프로세스/노드에서
//! 실행될 수 있기 때문입니다.

pub mod collab;
pub mod tokens;
pub mod users;
pub mod verification;

/// MongoDB duplicate key (E11000) 에러인지 판별합니다.
///
/// 유니크 인덱스 기반 삽입의 경합 패배를 도메인 에러로 변환할 때 사용합니다.
pub(crate) fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}
