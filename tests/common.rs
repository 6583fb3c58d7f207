use dsatmath::models::UploadCandidate;

pub const TWO_MB: usize = 2 * 1000 * 1000;

pub fn png(len: usize) -> UploadCandidate {
    UploadCandidate::new("logo.png", "image/png", vec![0x89; len])
}
