//! # 페이지네이션 헬퍼
//!
//! 이미 전부 메모리에 올라온(materialized) 정렬된 목록을
//! 고정 크기(10건) 페이지로 잘라내는 모듈입니다.
//!
//! SQL의 LIMIT/OFFSET으로 내리지 않고 메모리에서 자르는 것은 의도된
//! 설계입니다 — 데이터셋이 작다는 전제이며, 검색처럼 전체 매칭 건수가
//! 필요한 호출자가 같은 목록을 재사용할 수 있습니다.

/// 페이지당 질문 수. 설정으로 바꿀 수 없는 고정 상수입니다.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 정렬된 목록에서 요청한 페이지에 해당하는 구간을 복제하여 반환합니다.
///
/// # 규칙
/// - 페이지 번호는 1부터 시작합니다. `None`이면 1, 1 미만도 1로 보정합니다.
/// - 페이지 `p`는 오프셋 `(p-1)*10`부터 최대 10건을 담습니다.
/// - 범위를 벗어난 페이지는 **빈 Vec**을 반환합니다 (에러가 아님).
///   빈 결과를 실패로 볼지는 호출자(핸들러)가 결정합니다.
pub fn paginate<T: Clone>(page: Option<u32>, items: &[T]) -> Vec<T> {
    let page = page.unwrap_or(1).max(1) as usize;
    let start = (page - 1) * QUESTIONS_PER_PAGE;

    // skip이 목록 길이를 넘어가면 빈 이터레이터가 되므로 별도 경계 검사가 필요 없습니다
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_default() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(None, &items), (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn page_slices_at_fixed_offsets() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(Some(2), &items), (11..=20).collect::<Vec<i64>>());
        // 마지막 페이지는 남은 5건만 담습니다
        assert_eq!(paginate(Some(3), &items), (21..=25).collect::<Vec<i64>>());
    }

    #[test]
    fn page_below_one_is_clamped() {
        let items: Vec<i64> = (1..=12).collect();
        assert_eq!(paginate(Some(0), &items), (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn out_of_range_page_is_empty_not_error() {
        let items: Vec<i64> = (1..=12).collect();
        assert!(paginate(Some(3), &items).is_empty());
        assert!(paginate(Some(100), &items).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_page() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(Some(1), &items).is_empty());
    }
}
