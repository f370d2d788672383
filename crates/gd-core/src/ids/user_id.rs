use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of the user on whose behalf catalog requests are scoped.
///
/// 目录请求所代表的用户标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl_id!(UserId);
