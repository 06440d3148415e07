use crate::common::*;

/// Render `bytes` as quoted text when every byte is printable, lowercase hex
/// otherwise. Identifiers and wire tokens are usually short ASCII strings, so
/// diagnostics stay readable without assuming they always are.
pub(crate) fn fmt_bytes(f: &mut Formatter, bytes: &[u8]) -> fmt::Result {
  if !bytes.is_empty()
    && bytes
      .iter()
      .all(|byte| byte.is_ascii_graphic() || *byte == b' ')
  {
    write!(f, "\"{}\"", String::from_utf8_lossy(bytes))
  } else {
    for byte in bytes {
      write!(f, "{:02x}", byte)?;
    }
    Ok(())
  }
}

/// Adapter lending the same rendering to borrowed byte strings.
pub(crate) struct DebugBytes<'a>(pub(crate) &'a [u8]);

impl<'a> Debug for DebugBytes<'a> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    fmt_bytes(f, self.0)
  }
}
