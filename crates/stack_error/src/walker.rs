use std::any::type_name;

use crate::Frame;

/// Something that can take a snapshot of the active call stack
///
/// `skip` counts the frames right above the caller of
/// [capture_frames](StackWalker::capture_frames) that should be dropped, and
/// `max` bounds the number of frames returned. Frames come innermost first.
///
/// This never fails: when nothing can be resolved the result is simply empty.
pub trait StackWalker {
    fn capture_frames(&self, skip: usize, max: usize) -> Vec<Frame>;
}

impl<W> StackWalker for &W
where
    W: StackWalker + ?Sized,
{
    fn capture_frames(&self, skip: usize, max: usize) -> Vec<Frame> {
        (**self).capture_frames(skip, max)
    }
}

/// Walks the real stack of the current thread using `backtrace`
///
/// Inlined functions are reported as frames of their own, so the result does
/// not depend on what the optimiser decided to merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktraceWalker;

impl BacktraceWalker {
    /// Marks the frames of [BacktraceWalker::capture_frames] (and closures in
    /// it). Everything before the first of them is unwinder machinery.
    fn own_frame_marker() -> String {
        format!("{} as ", type_name::<Self>())
    }
}

impl StackWalker for BacktraceWalker {
    #[inline(never)]
    fn capture_frames(&self, skip: usize, max: usize) -> Vec<Frame> {
        let mut frames = Vec::new();
        if max == 0 {
            return frames;
        }
        let marker = Self::own_frame_marker();
        let mut anchored = false;
        let mut to_skip = skip;

        backtrace::trace(|raw| {
            backtrace::resolve_frame(raw, |symbol| {
                if frames.len() >= max {
                    return;
                }
                let frame = Frame::from_symbol(symbol);
                if frame.symbol().contains(&marker) {
                    anchored = true;
                    return;
                }
                if !anchored {
                    return;
                }
                if to_skip > 0 {
                    to_skip -= 1;
                    return;
                }
                frames.push(frame);
            });
            frames.len() < max
        });

        frames
    }
}

/// Replays a fixed list of frames instead of looking at the real stack
///
/// The script is read as if it was the stack above the walker's caller:
/// `skip` drops from the front and `max` cuts the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedWalker {
    script: Vec<Frame>,
}

impl ScriptedWalker {
    pub fn new(script: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// A call chain `depth` frames deep, `frame_0` being the innermost
    pub fn synthetic(depth: usize) -> Self {
        Self::new((0..depth).map(|i| {
            let line = u32::try_from(i + 1).unwrap_or(u32::MAX);
            Frame::new("synthetic.rs", line, format!("synthetic::frame_{i}"))
        }))
    }

    pub fn script(&self) -> &[Frame] {
        &self.script
    }
}

impl StackWalker for ScriptedWalker {
    fn capture_frames(&self, skip: usize, max: usize) -> Vec<Frame> {
        self.script.iter().skip(skip).take(max).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{BacktraceWalker, ScriptedWalker, StackWalker};

    #[test]
    fn scripted_honours_skip_and_max() {
        let walker = ScriptedWalker::synthetic(10);
        let frames = walker.capture_frames(2, 3);
        let names: Vec<_> = frames.iter().map(|f| f.symbol()).collect();
        assert_eq!(
            names,
            [
                "synthetic::frame_2",
                "synthetic::frame_3",
                "synthetic::frame_4"
            ]
        )
    }

    #[test]
    fn scripted_shallow_stack() {
        let walker = ScriptedWalker::synthetic(3);
        assert_eq!(walker.capture_frames(1, 20).len(), 2);
        assert!(walker.capture_frames(5, 20).is_empty());
    }

    #[test]
    fn backtrace_zero_max() {
        assert!(BacktraceWalker.capture_frames(0, 0).is_empty())
    }

    #[inline(never)]
    fn walk_here() -> Vec<crate::Frame> {
        BacktraceWalker.capture_frames(0, 5)
    }

    #[test]
    fn backtrace_starts_at_caller() {
        let frames = walk_here();
        assert!(frames.len() <= 5);
        assert!(frames[0].symbol().ends_with("walk_here"), "{frames:?}");
        assert!(frames
            .iter()
            .all(|f| !f.symbol().contains("BacktraceWalker")));
    }
}
