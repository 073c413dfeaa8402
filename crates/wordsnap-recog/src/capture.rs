//! Capture pipeline and its collaborators
//!
//! The detector never talks to hardware or the network itself. A
//! [`FrameSource`] delivers luma frames and an [`OcrClient`] turns a word
//! region into text; [`WordCapture`] wires them around a
//! [`WordExtentDetector`].

use crate::detector::{WordExtent, WordExtentDetector};
use crate::{RecogError, RecogResult};
use log::{debug, warn};
use std::collections::VecDeque;
use wordsnap_core::{GrayBuffer, Rect};
use wordsnap_io::{DebugDump, NoDump};

/// One-shot frame capture (a camera, a file, a test fixture)
pub trait FrameSource {
    /// Deliver the next grayscale frame.
    fn capture(&mut self) -> RecogResult<GrayBuffer>;
}

/// Recognizes the text in a region of a processed buffer
pub trait OcrClient {
    /// Recognize the word inside `region` of `image`.
    fn recognize(&mut self, image: &GrayBuffer, region: &Rect) -> RecogResult<String>;
}

/// Replays a fixed list of frames in order
#[derive(Debug, Clone, Default)]
pub struct StaticFrameSource {
    frames: VecDeque<GrayBuffer>,
}

impl StaticFrameSource {
    pub fn new(frames: impl IntoIterator<Item = GrayBuffer>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue a raw camera frame; only the leading luma plane is kept.
    pub fn push_raw(&mut self, data: Vec<u8>, width: u32, height: u32) -> RecogResult<()> {
        self.frames
            .push_back(GrayBuffer::from_bytes(data, width, height)?);
        Ok(())
    }

    /// Frames not yet delivered
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for StaticFrameSource {
    fn capture(&mut self) -> RecogResult<GrayBuffer> {
        self.frames
            .pop_front()
            .ok_or_else(|| RecogError::Capture("no frames left".into()))
    }
}

/// Parse the body returned by the OCR service.
///
/// The first line is a status line: empty on success, otherwise an error
/// message (which may continue on the following lines). On success every
/// remaining line is returned with a trailing `\n`.
///
/// # Errors
///
/// [`RecogError::Ocr`] with the status text, or for an empty body.
pub fn parse_ocr_response(body: &str) -> RecogResult<String> {
    let mut lines = body.lines();
    let status = lines
        .next()
        .ok_or_else(|| RecogError::Ocr("empty response".into()))?;
    if !status.is_empty() {
        let mut message = status.to_string();
        for line in lines {
            message.push_str(line);
        }
        return Err(RecogError::Ocr(message));
    }

    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    Ok(text)
}

/// Crop `rect` out of `image` and encode it as PNG for submission.
pub fn encode_word_png(image: &GrayBuffer, rect: &Rect) -> RecogResult<Vec<u8>> {
    Ok(wordsnap_io::encode_png(image, Some(rect))?)
}

/// What one capture produced
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    /// Detection result for the captured frame
    pub extent: WordExtent,
    /// Text returned by the OCR client
    pub text: String,
}

/// Capture, detect, recognize
pub struct WordCapture<S, C, D = NoDump> {
    source: S,
    client: C,
    detector: WordExtentDetector<D>,
}

impl<S: FrameSource, C: OcrClient, D: DebugDump> WordCapture<S, C, D> {
    pub fn new(source: S, client: C, detector: WordExtentDetector<D>) -> Self {
        Self {
            source,
            client,
            detector,
        }
    }

    /// Run one capture.
    ///
    /// Errors from any stage are returned unchanged; nothing is retried.
    pub fn capture_word(&mut self) -> RecogResult<CaptureOutcome> {
        let frame = self.source.capture()?;
        let extent = self.detector.detect(&frame)?;
        if extent.warnings.touches_border {
            warn!("word extent {:?} touches the frame border", extent.rect);
        }
        let text = self.client.recognize(&extent.binary, &extent.rect)?;
        debug!("WordCapture::capture_word recognized {} bytes", text.len());
        Ok(CaptureOutcome { extent, text })
    }

    pub fn detector(&self) -> &WordExtentDetector<D> {
        &self.detector
    }

    /// Take back the collaborators
    pub fn into_parts(self) -> (S, C, WordExtentDetector<D>) {
        (self.source, self.client, self.detector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        assert_eq!(parse_ocr_response("\nhello\nworld").unwrap(), "hello\nworld\n");
        assert_eq!(parse_ocr_response("\r\nword\r\n").unwrap(), "word\n");
        assert_eq!(parse_ocr_response("\n").unwrap(), "");
    }

    #[test]
    fn test_parse_failure_status() {
        match parse_ocr_response("engine busy\ntry later") {
            Err(RecogError::Ocr(msg)) => assert_eq!(msg, "engine busytry later"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(parse_ocr_response(""), Err(RecogError::Ocr(_))));
    }

    #[test]
    fn test_static_source() {
        let mut src = StaticFrameSource::new([GrayBuffer::new(2, 2).unwrap()]);
        // 4x2 luma plane followed by 4 chroma bytes
        src.push_raw(vec![7; 12], 4, 2).unwrap();
        assert!(src.push_raw(vec![7; 3], 4, 2).is_err());
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.capture().unwrap().dimensions(), (2, 2));
        assert_eq!(src.capture().unwrap().area(), 8);
        assert!(matches!(src.capture(), Err(RecogError::Capture(_))));
    }

    #[test]
    fn test_encode_word_png() {
        let img = GrayBuffer::new_filled(10, 10, 255).unwrap();
        let bytes = encode_word_png(&img, &Rect::new(2, 2, 6, 5).unwrap()).unwrap();
        let decoded = wordsnap_io::read_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert!(encode_word_png(&img, &Rect::new(8, 8, 12, 9).unwrap()).is_err());
    }
}
