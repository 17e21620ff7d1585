// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use encoding_rs::UTF_8;
use tracing::debug;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// 将上传内容按UTF-8解码
///
/// 去除开头的BOM；遇到非法字节序列时忽略这些字节，而不是报错
pub fn decode_utf8_lossy_ignore(input: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(input);
    if !had_errors {
        return text.into_owned();
    }

    debug!(bytes = input.len(), "dropping malformed UTF-8 sequences");
    text.chars()
        .filter(|c| *c != REPLACEMENT_CHARACTER)
        .collect()
}
