//! Catalog Commands

use std::marker::PhantomData;

use crate::domain::catalog::Payload;
use crate::domain::CatalogEntity;

/// 创建目录实体命令
///
/// 携带原始请求体，由 handler 校验为草稿
#[derive(Debug, Clone)]
pub struct CreateEntity<E: CatalogEntity> {
    pub payload: Payload,
    _entity: PhantomData<E>,
}

impl<E: CatalogEntity> CreateEntity<E> {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            _entity: PhantomData,
        }
    }
}
