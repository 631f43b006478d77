use std::collections::HashMap;
use std::time::Instant;

use crate::codec::{Poly, Reflect, TypeRegistry};

pub(crate) trait MovingAverage: Reflect {
	fn smoothing(&self) -> f64;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Mama {
	pub fast_limit: f64,
	pub slow_limit: f64,
}

crate::reflect_struct!(Mama {
	pub fast_limit as "FastLimit",
	pub slow_limit as "SlowLimit",
});

impl MovingAverage for Mama {
	fn smoothing(&self) -> f64 {
		self.fast_limit
	}
}

/// Only its boxed form satisfies `MovingAverage`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Ema {
	pub alpha: f64,
}

crate::reflect_struct!(Ema { pub alpha as "Alpha" });

impl MovingAverage for Box<Ema> {
	fn smoothing(&self) -> f64 {
		self.alpha
	}
}

/// Satisfies `MovingAverage` but is never registered.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Sma {
	pub period: u32,
}

crate::reflect_struct!(Sma { pub period as "Period" });

impl MovingAverage for Sma {
	fn smoothing(&self) -> f64 {
		1.0 / f64::from(self.period.max(1))
	}
}

crate::interface!(dyn MovingAverage: Mama, Box<Ema>, Sma);

/// Registered, but outside `MovingAverage`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Bogus {
	pub level: i64,
}

crate::reflect_struct!(Bogus { pub level as "Level" });

#[derive(Debug, Default)]
pub(crate) struct Calculator {
	pub inertia: f64,
	pub moving_average: Poly<dyn MovingAverage>,
	pub queue_optimal: i64,
	pub scratch: u32,
	pub cache: Option<Instant>,
}

crate::reflect_struct!(Calculator {
	pub inertia as "Inertia",
	pub moving_average as "MovingAverage",
	pub queue_optimal as "QueueOptimal",
	scratch,
	#[skip] pub cache,
});

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Known {
	pub a: i64,
}

crate::reflect_struct!(Known { pub a as "A" });

#[derive(Debug, Default)]
pub(crate) struct Fancy {
	pub slots: HashMap<String, Poly<dyn Reflect>>,
	pub labels: HashMap<String, String>,
	pub limit: Option<i64>,
	pub sizes: Vec<u32>,
}

crate::reflect_struct!(Fancy {
	pub slots as "Slots",
	pub labels as "Labels",
	pub limit as "Limit",
	pub sizes as "Sizes",
});

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Chain {
	pub next: Option<Box<Chain>>,
}

crate::reflect_struct!(Chain { pub next as "Next" });

impl Chain {
	pub(crate) fn with_links(links: usize) -> Self {
		let mut chain = Chain::default();
		for _ in 0..links {
			chain = Chain {
				next: Some(Box::new(chain)),
			};
		}
		chain
	}
}

pub(crate) fn mama(fast_limit: f64, slow_limit: f64) -> Poly<dyn MovingAverage> {
	Poly::new(Box::new(Mama { fast_limit, slow_limit }))
}

pub(crate) fn registry() -> TypeRegistry {
	let mut registry = TypeRegistry::new();
	registry
		.register_as::<Mama>("TypeX")
		.expect("register Mama")
		.register_as::<Ema>("Ema")
		.expect("register Ema")
		.register_as::<Bogus>("Bogus")
		.expect("register Bogus")
		.register_as::<Known>("Known")
		.expect("register Known")
		.register_as::<Calculator>("Calculator")
		.expect("register Calculator");
	registry
}
