#![deny(warnings)]

/// A backtrackable cursor over any iterator.
///
/// Items pulled from the source are buffered until `extract` or `ignore`
/// drops them, so callers can try a match and rewind with `set_pos` when it
/// fails. `pos` is -1 before the first item of the current lexeme.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos > blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until the buffer covers self.pos
    fn fill_buffer(&mut self) {
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    /// Items consumed since the last `extract`/`ignore`.
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).max(0) as usize;
        &self.buf[..n.min(self.buf.len())]
    }

    /// Drop everything up to and including the current item.
    pub fn ignore(&mut self) {
        let n = (self.pos + 1).max(0) as usize;
        self.buf = self.buf.split_off(n.min(self.buf.len()));
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    // Advance only if the next item satisfies 'pred'
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    pub fn skip_matching(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set,
    // self.curr() will return the matched item
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|item| any.contains(item))
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        self.skip_matching(|item| over.contains(item))
    }
}

///////////////////////////////////////////////////////////////////////////////
