use crate::options::BinaryDetection;

const ACCURATE_SAMPLE: usize = 4096;

/// Classifies file content as binary.
///
/// `Simple` is deliberately cheap: any NUL byte means binary. Formats that
/// contain no NUL are treated as text and simply yield no keys.
pub(crate) fn is_binary(content: &[u8], detection: BinaryDetection) -> bool {
    match detection {
        BinaryDetection::Simple => content.contains(&0),
        BinaryDetection::Accurate => {
            let sample = &content[..content.len().min(ACCURATE_SAMPLE)];
            content_inspector::inspect(sample).is_binary()
        }
        BinaryDetection::None => false,
    }
}
