//! Common source code fixtures for tests.

/// Plain scripts that every dialect must accept.
pub const PLAIN_CASES: &[&str] = &[
    "",
    "var a = 1, b, c = a + 2;",
    "let { x, y: [first, ...rest] = [], ...others } = point;",
    "const f = function* gen() { yield 1; yield* other(); };",
    "async function load(url) { const res = await fetch(url); return res.json(); }",
    "class A extends B { static #count = 0; #secret; get value() { return this.#secret; } static { A.#count++; } }",
    "for (let i = 0; i < 10; i++) { if (i % 2) continue; else break; }",
    "for (const key in obj) {} for (const item of list) {}",
    "async function drain(stream) { for await (const chunk of stream) process(chunk); }",
    "do { n--; } while (n > 0)",
    "outer: while (true) { inner: for (;;) { break outer; } }",
    "try { risky(); } catch { recover(); } finally { done(); }",
    "try { risky(); } catch (err) { log(err); }",
    "switch (kind) { case 1: case 2: handle(); break; default: skip(); }",
    "a ??= b; c ||= d; e &&= f; g **= 2; h >>>= 1;",
    "const v = obj?.deep?.[key]?.(arg) ?? fallback;",
    "const t = tag`hello ${name} and ${`nested ${x}`}`;",
    "const r = /ab+c/gi.test(s) ? 1 / 2 : 3;",
    "const o = { a, b: 1, [key]: 2, ...spread, method() {}, get g() { return 1; }, set s(v) {}, async *gen() {} };",
    "const fn = async (a, b = 2, ...rest) => a + b;",
    "const id = x => x;",
    "new Foo; new Bar(1).baz(); function F() { return new.target; }",
    "import('./mod.js').then(m => m.default); const u = import.meta.url;",
    "import def, { a as b, c } from 'mod'; import * as ns from 'ns'; import 'side-effect';",
    "export { a, b as c }; export * from 'x'; export default class {}",
    "export const answer = 42; export function run() {} export * as util from './util.js';",
    "debugger;",
    "with (scope) { value; }",
    "let a = 1\nlet b = 2\na\n++b",
    "function f() {\n  return\n  42\n}",
    "x = typeof y === 'undefined' || void 0 || delete o.p || !(a instanceof B) || 'k' in o;",
    "#!/usr/bin/env node\nconsole.log(process.argv);",
    "x = a ? (b) : c => d;",
    "x = a ? (b) : (c) => d;",
    "x = a?(b):c=>d;",
    "x = a ? (b) : c ? (d) : e => f;",
];

/// Typed superset snippets that are not plain scripts.
pub const TYPED_CASES: &[&str] = &[
    "let count: number = 0;",
    "function add(a: number, b?: number): number { return a + (b ?? 0); }",
    "interface Shape extends Base, Other { readonly kind: 'circle'; area(): number; [key: string]: unknown; }",
    "type Pair<T> = [first: T, second?: T];",
    "type Fn = (value: string) => void; type Ctor = new (...args: any[]) => object;",
    "type Keys = keyof typeof config; type Item = Items[number];",
    "type Ro<T> = { readonly [K in keyof T]?: T[K] };",
    "type Unwrap<T> = T extends Promise<infer U> ? U : T;",
    "type Greeting = `hello ${string}`;",
    "enum Color { Red, Green = 'green', Blue = 4 } const enum Flags { A = 1 << 0 }",
    "declare module 'lib' { export function f(): void; } declare const VERSION: string;",
    "namespace Geometry.Shapes { export const unit = 1; }",
    "abstract class Animal implements Named { protected abstract speak(): void; private readonly name!: string; }",
    "class Point { constructor(public x: number, private y = 0) {} }",
    "function first<T extends unknown[]>(items: T): T[0] { return items[0]; }",
    "const id = <T,>(value: T): T => value;",
    "const n = value as unknown as number; const s = config satisfies Config; const m = maybe!.prop;",
    "const nums = parse<number[]>(text);",
    "function isString(x: unknown): x is string { return typeof x === 'string'; }",
    "function assertOk(x: unknown): asserts x {}",
    "import type { Props } from './props'; export type { Props };",
    "import fs = require('fs'); export = fs;",
    "@Component({ selector: 'app' }) class App { @Input() name: string = ''; }",
    "let u: string | number & { tag: 'x' } | null;",
];

/// Angle-bracket assertions: typed superset only, they collide with tags.
pub const ANGLE_ASSERTION: &str = "const n = <number>value;";

/// Markup snippets.
pub const MARKUP_CASES: &[&str] = &[
    "<div>{x}</div>",
    "const a = <div className=\"box\" data-id='1' aria-hidden>hello {name}!</div>;",
    "const b = <><Item key={1} /><Item {...props} /></>;",
    "const c = <Foo.Bar render={() => <span />}>{/* nothing */}</Foo.Bar>;",
    "const d = <svg:rect width=\"10\" />;",
    "function List({ items }: { items: string[] }) {\n  return (\n    <ul>\n      {items.map(item => <li key={item}>{item}</li>)}\n    </ul>\n  );\n}",
    "const el = <Select<Option> value={v} onChange={(e: Event) => set(e)} />;",
    "const f = cond ? <A /> : <B />;",
];
