pub mod genai;
pub mod storage;
