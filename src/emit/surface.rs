//! Static rendering surface: a generic D3 tree page with collapse/expand,
//! fit-to-view, and a legend strip. The payload JSON is substituted for
//! `__DATA__` at emit time; visual styling here is not a compatibility
//! surface, the payload field names are.

pub const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>__TITLE__ - Management Tree</title>
<style>
  body { font-family: Inter, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; margin: 0; background: #0f1117; color: #e6e6e6; }
  header { padding: 16px 24px; border-bottom: 1px solid #222; position: sticky; top: 0; background: #0f1117; z-index: 2; }
  .header-row { display: flex; align-items: center; gap: 10px; }
  .logo { width: 24px; height: 24px; border-radius: 6px; object-fit: cover; box-shadow: 0 0 0 1px #333 inset; }
  h1 { margin: 0; font-size: 18px; font-weight: 600; }
  #legend { display: flex; gap: 16px; align-items: center; flex-wrap: wrap; margin-top: 8px; }
  .legend-item { display: inline-flex; gap: 8px; align-items: center; font-size: 12px; opacity: 0.9; }
  .legend-swatch { width: 12px; height: 12px; border-radius: 3px; display: inline-block; }
  #chart { width: 100%; height: calc(100vh - 80px); }
  .node rect { rx: 8px; ry: 8px; }
  .node text.title { font-size: 12px; font-weight: 600; fill: #f0f0f0; }
  .node text.subtitle { font-size: 11px; fill: #c9c9c9; }
  .link { fill: none; stroke: #666; stroke-width: 1.25px; opacity: 0.75; }
  footer { position: fixed; right: 12px; bottom: 10px; font-size: 11px; opacity: 0.7; }
  button { background: #1f2430; color: #e6e6e6; border: 1px solid #333; border-radius: 6px; padding: 6px 10px; cursor: pointer; }
  button:hover { border-color: #555; }
</style>
</head>
<body>
  <header>
    <div class="header-row">__LOGO_HTML__<h1>__TITLE__ — Management Tree</h1></div>
    <div id="legend"></div>
  </header>
  <div id="chart"></div>
  <footer>
    <button id="fit">Fit</button>
  </footer>
  <script src="https://cdn.jsdelivr.net/npm/d3@7/dist/d3.min.js"></script>
  <script>
  const treeData = __DATA__;
  const orientation = treeData.orientation || 'horizontal';

  const chartElem = document.getElementById('chart');
  const width = chartElem.clientWidth;
  const height = chartElem.clientHeight;

  const svg = d3.select('#chart').append('svg')
    .attr('width', width)
    .attr('height', height)
    .style('background', '#0f1117');

  const g = svg.append('g').attr('transform', 'translate(40,40)');

  // Synthetic super-root anchoring the (possibly multiple) hierarchy roots.
  // Child order comes from the payload and is intentionally not re-sorted.
  const root = d3.hierarchy({ name: treeData.name, children: treeData.children })
    .sum(d => 1);

  const nodeWidth = 180;
  const nodeHeight = 56;
  const nodeGapX = 36;
  const nodeGapY = 24;

  const treeLayout = d3.tree().nodeSize(
    orientation === 'horizontal' ? [nodeHeight + nodeGapY, nodeWidth + nodeGapX] : [nodeWidth + nodeGapX, nodeHeight + nodeGapY]
  );
  treeLayout(root);

  function fitToViewBox() {
    const bbox = g.node().getBBox();
    const margin = 40;
    const vb = [bbox.x - margin, bbox.y - margin, bbox.width + 2*margin, bbox.height + 2*margin];
    svg.attr('viewBox', vb.join(' '));
  }
  fitToViewBox();
  document.getElementById('fit').onclick = fitToViewBox;

  const diagonal = orientation === 'horizontal'
    ? d3.linkHorizontal().x(d => d.y).y(d => d.x)
    : d3.linkVertical().x(d => d.x).y(d => d.y);

  const place = orientation === 'horizontal'
    ? d => `translate(${d.y},${d.x})`
    : d => `translate(${d.x},${d.y})`;

  g.selectAll('path.link')
    .data(root.links())
    .enter()
    .append('path')
    .attr('class', 'link')
    .attr('d', diagonal)
    .attr('stroke', '#3a3f4b');

  const node = g.selectAll('g.node')
    .data(root.descendants())
    .enter()
    .append('g')
    .attr('class', 'node')
    .attr('transform', place);

  node.append('rect')
    .attr('x', -nodeWidth/2)
    .attr('y', -nodeHeight/2)
    .attr('width', nodeWidth)
    .attr('height', nodeHeight)
    .attr('fill', d => d.data.color || '#2b2f3a')
    .attr('stroke', '#1d1f27')
    .attr('stroke-width', 1.25)
    .attr('opacity', d => d.depth === 0 ? 0.15 : 0.9);

  node.append('text')
    .attr('class', 'title')
    .attr('text-anchor', 'middle')
    .attr('dy', '-0.25em')
    .text(d => d.depth === 0 ? treeData.name : (d.data.name || ''));

  node.append('text')
    .attr('class', 'subtitle')
    .attr('text-anchor', 'middle')
    .attr('dy', '1em')
    .text(d => d.depth === 0 ? '' : (d.data.groupName || ''));

  const legend = d3.select('#legend')
    .selectAll('.legend-item')
    .data(treeData.legend)
    .enter()
    .append('div')
    .attr('class', 'legend-item');

  legend.append('span')
    .attr('class', 'legend-swatch')
    .style('background', d => d.color || '#666');

  legend.append('span').text(d => d.name);

  node.on('click', function(event, d){
    if (!d.children && !d._children) return;
    if (d.children) { d._children = d.children; d.children = null; }
    else { d.children = d._children; d._children = null; }
    update();
  });

  function update(){
    treeLayout(root);
    g.selectAll('path.link').data(root.links()).attr('d', diagonal);
    g.selectAll('g.node').data(root.descendants()).attr('transform', place);
    fitToViewBox();
  }
  </script>
</body>
</html>
"##;
