//! Reader type - a computation that reads a shared environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers with
//! `fmap`, `map2` or `flat_map` builds a larger function, and the
//! environment given to [`Reader::run`] is handed unchanged to every step.
//! Only [`Reader::local`] can show a sub-computation a different
//! environment.
//!
//! Reader implements [`TypeConstructor`] but provides `fmap`, `flat_map`,
//! `map2` and the rest as inherent methods. A reader may be run many times,
//! so its continuations must be `Fn + 'static` and the environment must be
//! `Clone`. The `FnOnce` signatures of [`Functor`](crate::typeclass::Functor)
//! and [`Monad`](crate::typeclass::Monad) cannot promise either.
//!
//! # Laws
//!
//! - `Reader::ask().run(r) == r`
//! - `Reader::local(|r| r, m).run(r) == m.run(r)`
//! - `Reader::local(f, Reader::local(g, m)).run(r) == m.run(g(f(r)))`
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Reader;
//!
//! #[derive(Clone)]
//! struct Settings {
//!     greeting: String,
//!     punctuation: char,
//! }
//!
//! fn greet(name: &'static str) -> Reader<Settings, String> {
//!     Reader::asks(|settings: Settings| settings.greeting)
//!         .map2(Reader::asks(|settings: Settings| settings.punctuation), move |greeting, mark| {
//!             format!("{greeting}, {name}{mark}")
//!         })
//! }
//!
//! let settings = Settings { greeting: "Hello".to_string(), punctuation: '!' };
//! assert_eq!(greet("Ada").run(settings), "Hello, Ada!");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::TypeConstructor;

/// A computation from an environment `R` to a value `A`.
///
/// Cloning a reader is cheap: clones share the same function.
pub struct Reader<R, A> {
    computation: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Wraps a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Reader;
    ///
    /// let double: Reader<i32, i32> = Reader::new(|n| n * 2);
    /// assert_eq!(double.run(21), 42);
    /// assert_eq!(double.run(5), 10);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            computation: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: R) -> A {
        (self.computation)(environment)
    }

    /// A reader that ignores the environment and always yields `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// A reader that projects part of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment rewritten by `modifier`.
    ///
    /// Readers composed around the result still see the original
    /// environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Reader;
    ///
    /// let depth: Reader<u32, u32> = Reader::ask();
    /// let nested = Reader::local(|depth| depth + 1, depth.clone());
    /// let both = depth.product(nested);
    /// assert_eq!(both.run(3), (3, 4));
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let inner = computation.computation;
        Self::new(move |environment| inner(modifier(environment)))
    }

    /// Transforms the value produced by the reader.
    #[must_use]
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let inner = self.computation;
        Reader::new(move |environment| function(inner(environment)))
    }

    /// Chooses the next reader from this reader's value, then runs it
    /// against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Reader;
    ///
    /// let base: Reader<i32, i32> = Reader::ask();
    /// let chained = base.flat_map(|n| Reader::new(move |environment: i32| n * environment));
    /// assert_eq!(chained.run(7), 49);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        let inner = self.computation;
        Reader::new(move |environment: R| function(inner(environment.clone())).run(environment))
    }

    /// Alias for [`flat_map`](Reader::flat_map).
    #[must_use]
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Runs this reader for its place in the sequence, then yields `next`'s
    /// value.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both readers against the same environment and combines their
    /// values.
    #[must_use]
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        R: Clone,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let first = self.computation;
        let second = other.computation;
        Reader::new(move |environment: R| {
            let a = first(environment.clone());
            function(a, second(environment))
        })
    }

    /// Three-argument form of [`map2`](Reader::map2).
    #[must_use]
    pub fn map3<B, C, D, F>(
        self,
        second: Reader<R, B>,
        third: Reader<R, C>,
        function: F,
    ) -> Reader<R, D>
    where
        R: Clone,
        B: 'static,
        C: 'static,
        D: 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        let first = self.computation;
        let second = second.computation;
        let third = third.computation;
        Reader::new(move |environment: R| {
            let a = first(environment.clone());
            let b = second(environment.clone());
            function(a, b, third(environment))
        })
    }

    /// Pairs the values of two readers.
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        R: Clone,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function this reader produces to the value `other`
    /// produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Reader;
    ///
    /// let scale: Reader<i32, Box<dyn Fn(i32) -> i32>> =
    ///     Reader::new(|factor| Box::new(move |n| n * factor) as Box<dyn Fn(i32) -> i32>);
    /// let value: Reader<i32, i32> = Reader::new(|factor| factor + 1);
    /// assert_eq!(scale.apply(value).run(3), 12);
    /// ```
    #[must_use]
    pub fn apply<B, Output>(self, other: Reader<R, B>) -> Reader<R, Output>
    where
        R: Clone,
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, b| function(b))
    }
}

impl<R: 'static> Reader<R, R> {
    /// A reader that yields the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<R, A> TypeConstructor for Reader<R, A> {
    type Inner = A;
    type WithType<B> = Reader<R, B>;
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

impl<R, A> fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Reader>")
    }
}
