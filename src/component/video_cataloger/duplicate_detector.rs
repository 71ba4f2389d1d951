//! 依中繼資料找出疑似重複的影片
//!
//! 比對欄位由呼叫端明確傳入（見 [`DuplicateKey`](crate::config::DuplicateKey)），
//! 數值比對的是已四捨五入到小數兩位的值，不做容差比較

use super::record::{FrameSize, VideoRecord};
use crate::config::KeyField;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyValue {
    /// 以百分之一秒為單位；`None` 與 `None` 視為相同
    Duration(Option<u64>),
    FrameSize(Option<FrameSize>),
    /// 以百分之一個大小單位為單位
    FileSize(u64),
    FileType(String),
}

fn hundredths(value: f64) -> u64 {
    (value * 100.0).round() as u64
}

fn key_value(record: &VideoRecord, field: KeyField) -> KeyValue {
    match field {
        KeyField::Duration => KeyValue::Duration(record.duration_seconds.map(hundredths)),
        KeyField::FrameSize => KeyValue::FrameSize(record.frame_size),
        KeyField::FileSize => KeyValue::FileSize(hundredths(record.file_size)),
        KeyField::FileType => KeyValue::FileType(record.file_type.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub records: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuplicateSubset {
    /// 所有重複群組的成員，維持原目錄順序
    pub records: Vec<VideoRecord>,
    /// 依第一個成員出現的順序排列
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateSubset {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 將所有比對欄位完全相同、且成員數 >= 2 的群組取出
///
/// `key_fields` 為空時所有紀錄共用同一個鍵
#[must_use]
pub fn find_duplicates(records: &[VideoRecord], key_fields: &[KeyField]) -> DuplicateSubset {
    let mut group_index: HashMap<Vec<KeyValue>, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let key: Vec<KeyValue> = key_fields
            .iter()
            .map(|&field| key_value(record, field))
            .collect();
        let index = *group_index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[index].push(i);
    }

    let mut is_duplicate = vec![false; records.len()];
    let groups: Vec<DuplicateGroup> = groups
        .into_iter()
        .filter(|members| members.len() >= 2)
        .map(|members| {
            for &i in &members {
                is_duplicate[i] = true;
            }
            DuplicateGroup {
                records: members.iter().map(|&i| records[i].clone()).collect(),
            }
        })
        .collect();

    let duplicates = records
        .iter()
        .zip(&is_duplicate)
        .filter(|(_, dup)| **dup)
        .map(|(record, _)| record.clone())
        .collect();

    DuplicateSubset {
        records: duplicates,
        groups,
    }
}
