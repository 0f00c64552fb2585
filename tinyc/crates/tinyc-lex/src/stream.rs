//! Bounded-lookahead stream for traversing source characters.
//!
//! This module provides the `PeekStream` struct which wraps any iterator and
//! adds non-destructive lookahead plus a bounded retraction window. Every
//! recognizer in the lexer is written against this type: peek to classify,
//! consume only what belongs to the current token, and put back a character
//! that turned out to start the next one.

use tracing::trace;

/// Number of most recently produced items that can be put back.
pub const CACHE_SIZE: usize = 10;

/// One step of a [`PeekStream`].
///
/// End of input is reported out of band instead of through a sentinel
/// character, so every `char` (including `'\0'`) is a legitimate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead<T> {
    /// The next item from the underlying iterator.
    Value(T),
    /// The underlying iterator has run dry. Produced exactly once.
    End,
    /// Produced by every call after `End` has been handed out.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Returns the carried value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Lookahead::Value(v) => Some(v),
            Lookahead::End | Lookahead::Exhausted => None,
        }
    }

    /// Returns true for both `End` and `Exhausted`.
    pub fn is_end(&self) -> bool {
        !matches!(self, Lookahead::Value(_))
    }
}

impl Lookahead<char> {
    /// Returns true if this is a value satisfying `pred`.
    #[inline]
    pub fn is_char(&self, pred: impl FnOnce(char) -> bool) -> bool {
        match *self {
            Lookahead::Value(c) => pred(c),
            _ => false,
        }
    }
}

/// A stream with one-item lookahead and bounded retraction.
///
/// The stream remembers the last [`CACHE_SIZE`] items it returned in a ring
/// buffer. `put_back` moves the newest of them onto a LIFO stack which is
/// drained before the underlying iterator is touched again.
///
/// # Example
///
/// ```
/// use tinyc_lex::stream::{Lookahead, PeekStream};
///
/// let mut stream = PeekStream::new("ab".chars());
///
/// assert_eq!(stream.peek(), Lookahead::Value('a'));
/// assert_eq!(stream.next(), Lookahead::Value('a'));
/// stream.put_back();
/// assert_eq!(stream.next(), Lookahead::Value('a'));
/// assert_eq!(stream.next(), Lookahead::Value('b'));
/// assert_eq!(stream.next(), Lookahead::End);
/// assert_eq!(stream.next(), Lookahead::Exhausted);
/// ```
pub struct PeekStream<I: Iterator> {
    /// The single-pass producer.
    iter: I,

    /// Ring buffer of the most recently returned items.
    cache: [Option<Lookahead<I::Item>>; CACHE_SIZE],

    /// Slot of the oldest cached item.
    cache_head: usize,

    /// Number of occupied cache slots.
    cache_len: usize,

    /// Retraction stack; the top lives at `put_backs[put_back_len - 1]`.
    put_backs: [Option<Lookahead<I::Item>>; CACHE_SIZE],

    /// Number of items waiting on the retraction stack.
    put_back_len: usize,

    /// Whether `End` has already been produced.
    end_emitted: bool,
}

impl<I> PeekStream<I>
where
    I: Iterator,
    I::Item: Copy,
{
    /// Creates a new stream over the given iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::stream::PeekStream;
    ///
    /// let stream = PeekStream::new("var x".chars());
    /// assert_eq!(stream.cached_len(), 0);
    /// ```
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            cache: [None; CACHE_SIZE],
            cache_head: 0,
            cache_len: 0,
            put_backs: [None; CACHE_SIZE],
            put_back_len: 0,
            end_emitted: false,
        }
    }

    /// Returns the next item and advances the stream.
    ///
    /// Items on the retraction stack come first, most recently retracted
    /// first. Whatever is returned is also remembered in the trailing cache.
    pub fn next(&mut self) -> Lookahead<I::Item> {
        let item = match self.pop_put_back() {
            Some(item) => item,
            None => self.pull(),
        };
        self.remember(item);
        item
    }

    /// Returns the next item without consuming it.
    ///
    /// Repeated calls with no intervening `next` return the same item.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::stream::{Lookahead, PeekStream};
    ///
    /// let mut stream = PeekStream::new("x".chars());
    /// assert_eq!(stream.peek(), Lookahead::Value('x'));
    /// assert_eq!(stream.peek(), Lookahead::Value('x'));
    /// assert_eq!(stream.next(), Lookahead::Value('x'));
    /// ```
    pub fn peek(&mut self) -> Lookahead<I::Item> {
        if self.put_back_len > 0 {
            if let Some(item) = self.put_backs[self.put_back_len - 1] {
                return item;
            }
        }

        let item = self.next();
        self.put_back();
        item
    }

    /// Retracts the most recently returned item.
    ///
    /// The retracted item becomes the result of the following `next`. At most
    /// [`CACHE_SIZE`] consecutive retractions are honored; further calls do
    /// nothing.
    pub fn put_back(&mut self) {
        if let Some(item) = self.forget_newest() {
            debug_assert!(self.put_back_len < CACHE_SIZE);
            self.put_backs[self.put_back_len] = Some(item);
            self.put_back_len += 1;
            trace!(pending = self.put_back_len, "put back");
        }
    }

    /// Returns true while the stream still has something other than
    /// `Exhausted` to hand out.
    ///
    /// Note that `End` itself counts as something to hand out.
    pub fn has_next(&mut self) -> bool
    where
        I::Item: PartialEq,
    {
        self.peek() != Lookahead::Exhausted
    }

    /// Number of items currently held in the trailing cache.
    pub fn cached_len(&self) -> usize {
        self.cache_len
    }

    /// Number of retracted items waiting to be returned again.
    pub fn pending_len(&self) -> usize {
        self.put_back_len
    }

    fn pull(&mut self) -> Lookahead<I::Item> {
        if self.end_emitted {
            return Lookahead::Exhausted;
        }
        match self.iter.next() {
            Some(v) => Lookahead::Value(v),
            None => {
                self.end_emitted = true;
                Lookahead::End
            }
        }
    }

    fn pop_put_back(&mut self) -> Option<Lookahead<I::Item>> {
        if self.put_back_len == 0 {
            return None;
        }
        self.put_back_len -= 1;
        self.put_backs[self.put_back_len].take()
    }

    /// Appends to the ring buffer, evicting the oldest entry when full.
    fn remember(&mut self, item: Lookahead<I::Item>) {
        if self.cache_len == CACHE_SIZE {
            self.cache[self.cache_head] = Some(item);
            self.cache_head = (self.cache_head + 1) % CACHE_SIZE;
        } else {
            let slot = (self.cache_head + self.cache_len) % CACHE_SIZE;
            self.cache[slot] = Some(item);
            self.cache_len += 1;
        }
    }

    /// Removes and returns the newest cached entry.
    fn forget_newest(&mut self) -> Option<Lookahead<I::Item>> {
        if self.cache_len == 0 {
            return None;
        }
        self.cache_len -= 1;
        let slot = (self.cache_head + self.cache_len) % CACHE_SIZE;
        self.cache[slot].take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stream(source: &str) -> PeekStream<std::str::Chars<'_>> {
        PeekStream::new(source.chars())
    }

    #[test]
    fn test_next_in_order() {
        let mut s = stream("abc");
        assert_eq!(s.next(), Lookahead::Value('a'));
        assert_eq!(s.next(), Lookahead::Value('b'));
        assert_eq!(s.next(), Lookahead::Value('c'));
    }

    #[test]
    fn test_end_emitted_once() {
        let mut s = stream("a");
        assert_eq!(s.next(), Lookahead::Value('a'));
        assert_eq!(s.next(), Lookahead::End);
        assert_eq!(s.next(), Lookahead::Exhausted);
        assert_eq!(s.next(), Lookahead::Exhausted);
    }

    #[test]
    fn test_empty_source() {
        let mut s = stream("");
        assert!(s.has_next());
        assert_eq!(s.next(), Lookahead::End);
        assert!(!s.has_next());
    }

    #[test]
    fn test_nul_is_a_value() {
        let mut s = stream("\0");
        assert_eq!(s.next(), Lookahead::Value('\0'));
        assert_eq!(s.next(), Lookahead::End);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut s = stream("xy");
        assert_eq!(s.peek(), Lookahead::Value('x'));
        assert_eq!(s.peek(), Lookahead::Value('x'));
        assert_eq!(s.pending_len(), 1);
        assert_eq!(s.next(), Lookahead::Value('x'));
        assert_eq!(s.next(), Lookahead::Value('y'));
    }

    #[test]
    fn test_peek_at_end() {
        let mut s = stream("");
        assert_eq!(s.peek(), Lookahead::End);
        assert_eq!(s.peek(), Lookahead::End);
        assert_eq!(s.next(), Lookahead::End);
        assert_eq!(s.peek(), Lookahead::Exhausted);
    }

    #[test]
    fn test_put_back_is_lifo() {
        let mut s = stream("abc");
        s.next();
        s.next();
        s.next();
        s.put_back();
        s.put_back();
        assert_eq!(s.next(), Lookahead::Value('b'));
        assert_eq!(s.next(), Lookahead::Value('c'));
        assert_eq!(s.next(), Lookahead::End);
    }

    #[test]
    fn test_put_back_on_empty_cache_is_noop() {
        let mut s = stream("a");
        s.put_back();
        assert_eq!(s.pending_len(), 0);
        assert_eq!(s.next(), Lookahead::Value('a'));
    }

    #[test]
    fn test_put_back_end() {
        let mut s = stream("");
        assert_eq!(s.next(), Lookahead::End);
        s.put_back();
        assert!(s.has_next());
        assert_eq!(s.next(), Lookahead::End);
        assert!(!s.has_next());
    }

    #[test]
    fn test_cache_is_bounded() {
        let mut s = stream("abcdefghijkl");
        for _ in 0..12 {
            s.next();
        }
        assert_eq!(s.cached_len(), CACHE_SIZE);

        for _ in 0..CACHE_SIZE + 1 {
            s.put_back();
        }
        // the eleventh retraction had nothing left to move
        assert_eq!(s.pending_len(), CACHE_SIZE);
        assert_eq!(s.cached_len(), 0);

        let replayed: String = (0..CACHE_SIZE).filter_map(|_| s.next().value()).collect();
        assert_eq!(replayed, "cdefghijkl");
        assert_eq!(s.next(), Lookahead::End);
    }

    #[test]
    fn test_has_next_does_not_consume() {
        let mut s = stream("q");
        assert!(s.has_next());
        assert!(s.has_next());
        assert_eq!(s.next(), Lookahead::Value('q'));
    }

    #[test]
    fn test_non_char_items() {
        let mut s = PeekStream::new(vec![0u8, 1, 2].into_iter());
        assert_eq!(s.next(), Lookahead::Value(0));
        assert_eq!(s.peek(), Lookahead::Value(1));
        s.put_back();
        assert_eq!(s.next(), Lookahead::Value(0));
    }

    proptest! {
        #[test]
        fn prop_put_back_replays_window(source in "[a-z]{0,40}", taken in 0usize..40, back in 0usize..15) {
            let chars: Vec<char> = source.chars().collect();
            let taken = taken.min(chars.len());
            let mut s = stream(&source);
            for _ in 0..taken {
                s.next();
            }
            for _ in 0..back {
                s.put_back();
            }
            let retracted = back.min(taken).min(CACHE_SIZE);
            prop_assert_eq!(s.pending_len(), retracted);

            let rest: String = std::iter::from_fn(|| s.next().value()).collect();
            let expected: String = chars[taken - retracted..].iter().collect();
            prop_assert_eq!(rest, expected);
        }

        #[test]
        fn prop_peek_matches_next(source in "[ -~]{0,20}") {
            let mut s = stream(&source);
            loop {
                let peeked = s.peek();
                prop_assert_eq!(s.peek(), peeked);
                let taken = s.next();
                prop_assert_eq!(taken, peeked);
                if taken == Lookahead::Exhausted {
                    break;
                }
            }
        }
    }
}
