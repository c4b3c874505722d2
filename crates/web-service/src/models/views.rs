use serde::Serialize;
use shared_lib::CommCdMap;

/// 列表页面数据
///
/// - `codes`: 页面下拉框使用的公共代码，加载失败时为空
/// - `items`: 列表数据
#[derive(Serialize, Debug)]
pub struct ListView<T> {
    pub codes: CommCdMap,
    pub items: Vec<T>,
    /// 列表条数
    pub total: usize,
}

impl<T> ListView<T> {
    pub fn new(codes: CommCdMap, items: Vec<T>) -> Self {
        let total = items.len();
        Self { codes, items, total }
    }
}

/// 公共代码页面数据
#[derive(Serialize, Debug)]
pub struct CodeView {
    pub codes: CommCdMap,
}
